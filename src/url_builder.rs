use url::form_urlencoded;

pub type QueryParams = Vec<(String, String)>;

#[derive(Debug, Clone)]
pub struct Url {
    base: String,
    query_params: QueryParams,
}

impl Url {
    pub fn new(base: &str) -> Self {
        Url {
            base: base.trim_end_matches('/').to_string(),
            query_params: Vec::new(),
        }
    }

    /// Append a path segment, keeping exactly one `/` between parts.
    pub fn join(mut self, path: &str) -> Self {
        self.base = format!("{}/{}", self.base, path.trim_start_matches('/'));
        self
    }

    pub fn add_args<K, V>(mut self, args: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query_params
            .extend(args.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(&self) -> String {
        if self.query_params.is_empty() {
            return self.base.clone();
        }

        let query_string = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_params.iter())
            .finish();

        format!("{}?{}", self.base, query_string)
    }
}
