use super::config::PlaceholderStyle;
use crate::param::Param;

/// Буфер SQL + параметры в порядке появления плейсхолдеров.
pub struct SqlWriter {
    pub buf: String,
    pub next_param_idx: usize, // 1-based для $1/$2..., игнорится при '?'
    pub placeholders: PlaceholderStyle,
    pub params: Vec<Param>,
}

impl SqlWriter {
    pub fn new(cap: usize, placeholders: PlaceholderStyle) -> Self {
        Self {
            buf: String::with_capacity(cap),
            next_param_idx: 1,
            placeholders,
            params: Vec::new(),
        }
    }

    #[inline]
    pub fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    #[inline]
    pub fn push_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Вставляет плейсхолдер (увеличивая счётчик при Numbered)
    pub fn push_placeholder(&mut self) {
        match self.placeholders {
            PlaceholderStyle::Question => self.push("?"),
            PlaceholderStyle::Numbered => {
                let i = self.next_param_idx;
                self.next_param_idx += 1;
                self.buf.push('$');
                self.push_u64(i as u64);
            }
        }
    }

    /// Плейсхолдер + значение в список параметров
    #[inline]
    pub fn push_param(&mut self, p: Param) {
        self.push_placeholder();
        self.params.push(p);
    }

    #[inline]
    pub fn push_u64(&mut self, v: u64) {
        use itoa::Buffer;
        let mut buf = Buffer::new();
        self.buf.push_str(buf.format(v));
    }

    #[inline]
    pub fn push_sep(&mut self, i: usize, sep: &str) {
        if i > 0 {
            self.buf.push_str(sep);
        }
    }

    /// Отрендерить фрагмент отдельно от основного текста.
    ///
    /// Счётчик плейсхолдеров и параметры общие, поэтому фрагмент обязан попасть
    /// в итоговый текст в том же порядке, в каком его рендерили.
    pub fn capture<F, E>(&mut self, f: F) -> Result<String, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        let start = self.buf.len();
        f(self)?;
        Ok(self.buf.split_off(start))
    }

    pub fn finish(self) -> (String, Vec<Param>) {
        (self.buf, self.params)
    }
}
