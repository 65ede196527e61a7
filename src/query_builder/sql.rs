use crate::{
    param::Param,
    query_builder::{QueryBuilder, Result},
    renderer::{self, SqlRenderCfg},
};

impl QueryBuilder {
    /// Собрать и отрендерить с пресетом под диалект билдера.
    #[inline]
    pub fn to_sql(self) -> Result<(String, Vec<Param>)> {
        let cfg = renderer::cfg_for(self.dialect);
        self.to_sql_with(&cfg)
    }

    /// Собрать и отрендерить с явным конфигом.
    pub fn to_sql_with(self, cfg: &SqlRenderCfg) -> Result<(String, Vec<Param>)> {
        let model = self.build()?;
        Ok(renderer::render_select(&model, cfg)?)
    }
}
