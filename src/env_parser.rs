//! Lookup and cast environment variables with an optional schema.
//!
//! ```ignore
//! use genre_tracks::env_parser::{Cast, Env, NotSet, Spec};
//!
//! let env = Env::new([
//!     ("MAIL_ENABLED", Spec::from(Cast::Bool)),
//!     ("SMTP_LOGIN", Spec::with_default(Cast::Str, "DEFAULT")),
//! ]);
//!
//! if env.get("MAIL_ENABLED", (), None)?.as_bool() == Some(true) {
//!     // ...
//! }
//! let port = env.int("PORT", 8000)?;
//! let secret = env.str("SECRET_KEY", NotSet)?;
//! ```

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::env as process_env;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Values accepted as "true" by the boolean cast (compared lowercased).
pub const BOOLEAN_TRUE_STRINGS: [&str; 6] = ["true", "on", "ok", "y", "yes", "1"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Environment variable '{0}' not set.")]
    NotSet(String),
    #[error("{0}")]
    InvalidValue(String),
}

/// Helper type for Result with `ConfigurationError`
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Marker for "no default: fail if the variable is absent".
///
/// A distinct type rather than a value, so it can never compare equal to a
/// default the caller meant literally (`Value::Null` included).
#[derive(Debug, Clone, Copy)]
pub struct NotSet;

/// URL components, best effort. Fields that are not present are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
}

/// A looked-up value, typed according to the cast that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<String>),
    Tuple(Vec<String>),
    Set(BTreeSet<String>),
    Dict(BTreeMap<String, String>),
    Json(serde_json::Value),
    Url(UrlParts),
}

impl Value {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Json(j) => Some(j),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&UrlParts> {
        match self {
            Value::Url(u) => Some(u),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_string(self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::Json(value)
    }
}

/// Conversion applied to a raw environment string.
#[derive(Clone, Copy)]
pub enum Cast {
    Str,
    Bool,
    Int,
    Float,
    List,
    Tuple,
    Set,
    Dict,
    Json,
    Url,
    /// Caller-supplied conversion. An `Err` becomes `ConfigurationError::InvalidValue`.
    Custom(fn(&str) -> std::result::Result<Value, String>),
}

impl fmt::Debug for Cast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cast::Str => "str",
            Cast::Bool => "bool",
            Cast::Int => "int",
            Cast::Float => "float",
            Cast::List => "list",
            Cast::Tuple => "tuple",
            Cast::Set => "set",
            Cast::Dict => "dict",
            Cast::Json => "json",
            Cast::Url => "url",
            Cast::Custom(_) => "custom",
        };
        f.write_str(name)
    }
}

/// Schema entry for one variable.
#[derive(Debug, Clone)]
pub enum Spec {
    CastOnly(Cast),
    CastWithDefault(Cast, Value),
}

impl Spec {
    pub fn with_default(cast: Cast, default: impl Into<Value>) -> Self {
        Spec::CastWithDefault(cast, default.into())
    }

    fn cast(&self) -> Cast {
        match self {
            Spec::CastOnly(cast) | Spec::CastWithDefault(cast, _) => *cast,
        }
    }

    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        match self {
            Spec::CastOnly(_) => None,
            Spec::CastWithDefault(_, default) => Some(default),
        }
    }
}

impl From<Cast> for Spec {
    fn from(cast: Cast) -> Self {
        Spec::CastOnly(cast)
    }
}

/// Default handed to a lookup.
#[derive(Debug, Clone, Default)]
pub enum Fallback {
    /// Nothing given: null.
    #[default]
    Unspecified,
    /// Required: an absent variable is an error.
    NotSet,
    /// Returned as-is (uncast) when the variable is absent.
    Value(Value),
}

impl From<()> for Fallback {
    fn from((): ()) -> Self {
        Fallback::Unspecified
    }
}

impl From<NotSet> for Fallback {
    fn from(_: NotSet) -> Self {
        Fallback::NotSet
    }
}

impl From<Value> for Fallback {
    fn from(value: Value) -> Self {
        Fallback::Value(value)
    }
}

macro_rules! fallback_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Fallback {
                fn from(value: $ty) -> Self {
                    Fallback::Value(Value::from(value))
                }
            }
        )*
    };
}

fallback_from!(&str, String, bool, i32, i64, f64, serde_json::Value);

/// Lookup-and-cast accessor over the live process environment.
#[derive(Debug, Clone, Default)]
pub struct Env {
    schema: HashMap<String, Spec>,
}

impl Env {
    pub fn new<K, I>(schema: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Spec)>,
    {
        Env {
            schema: schema.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    #[must_use]
    pub fn schema(&self) -> &HashMap<String, Spec> {
        &self.schema
    }

    /// Default declared by the schema for `var`, as a lookup fallback.
    /// `Fallback::NotSet` when the schema declares none.
    #[must_use]
    pub fn schema_default(&self, var: &str) -> Fallback {
        self.schema
            .get(var)
            .and_then(Spec::default_value)
            .cloned()
            .map_or(Fallback::NotSet, Fallback::Value)
    }

    /// Return the value for the environment variable `var`.
    ///
    /// # Arguments
    /// * `var` - Name of the variable.
    /// * `default` - Returned uncast when `var` is absent. `NotSet` makes the
    ///   variable required; `()` means null. Schema defaults are never applied
    ///   here, read them through [`Env::schema_default`].
    /// * `cast` - Conversion to apply. Falls back to the schema cast, then `Cast::Str`.
    ///
    /// # Errors
    /// * `ConfigurationError::NotSet` - `var` is absent and required.
    /// * `ConfigurationError::InvalidValue` - the raw value failed to cast.
    pub fn get(
        &self,
        var: &str,
        default: impl Into<Fallback>,
        cast: Option<Cast>,
    ) -> Result<Value> {
        let cast = self.resolve_cast(var, cast);

        let default = match default.into() {
            Fallback::Unspecified => Fallback::Value(Value::Null),
            other => other,
        };

        debug!(var, ?cast, ?default, "get environment variable");

        let raw = match process_env::var_os(var) {
            Some(raw) => raw.to_string_lossy().into_owned(),
            None => {
                return match default {
                    Fallback::Value(value) => Ok(value),
                    Fallback::NotSet | Fallback::Unspecified => {
                        Err(ConfigurationError::NotSet(var.to_string()))
                    }
                };
            }
        };

        // A raw value equal to the default is handed back untouched.
        if let Fallback::Value(Value::Str(default)) = &default {
            if *default == raw {
                return Ok(Value::Str(raw));
            }
        }

        Self::cast(&raw, cast)
    }

    fn resolve_cast(&self, var: &str, cast: Option<Cast>) -> Cast {
        cast.or_else(|| self.schema.get(var).map(Spec::cast))
            .unwrap_or(Cast::Str)
    }

    /// Parse and cast a raw string.
    ///
    /// # Errors
    /// Returns `ConfigurationError::InvalidValue` with the conversion's message.
    pub fn cast(value: &str, cast: Cast) -> Result<Value> {
        match cast {
            Cast::Str => Ok(Value::Str(value.to_string())),
            Cast::Bool => Ok(Value::Bool(parse_bool(value))),
            Cast::Int => parse_int(value).map(Value::Int),
            Cast::Float => parse_float(value).map(Value::Float),
            Cast::List => Ok(Value::List(chars(value).collect())),
            Cast::Tuple => Ok(Value::Tuple(chars(value).collect())),
            Cast::Set => Ok(Value::Set(chars(value).collect())),
            Cast::Dict => parse_dict(value).map(Value::Dict),
            Cast::Json => serde_json::from_str(value)
                .map(Value::Json)
                .map_err(|e| ConfigurationError::InvalidValue(e.to_string())),
            Cast::Url => Ok(Value::Url(parse_url(value))),
            Cast::Custom(f) => f(value).map_err(ConfigurationError::InvalidValue),
        }
    }

    // Shortcuts

    /// # Errors
    /// See [`Env::get`].
    pub fn bool(&self, var: &str, default: impl Into<Fallback>) -> Result<Value> {
        self.get(var, default, Some(Cast::Bool))
    }

    /// # Errors
    /// See [`Env::get`].
    pub fn dict(&self, var: &str, default: impl Into<Fallback>) -> Result<Value> {
        self.get(var, default, Some(Cast::Dict))
    }

    /// # Errors
    /// See [`Env::get`].
    pub fn float(&self, var: &str, default: impl Into<Fallback>) -> Result<Value> {
        self.get(var, default, Some(Cast::Float))
    }

    /// # Errors
    /// See [`Env::get`].
    pub fn int(&self, var: &str, default: impl Into<Fallback>) -> Result<Value> {
        self.get(var, default, Some(Cast::Int))
    }

    /// # Errors
    /// See [`Env::get`].
    pub fn list(&self, var: &str, default: impl Into<Fallback>) -> Result<Value> {
        self.get(var, default, Some(Cast::List))
    }

    /// # Errors
    /// See [`Env::get`].
    pub fn set(&self, var: &str, default: impl Into<Fallback>) -> Result<Value> {
        self.get(var, default, Some(Cast::Set))
    }

    /// # Errors
    /// See [`Env::get`].
    pub fn str(&self, var: &str, default: impl Into<Fallback>) -> Result<Value> {
        self.get(var, default, Some(Cast::Str))
    }

    /// # Errors
    /// See [`Env::get`].
    pub fn tuple(&self, var: &str, default: impl Into<Fallback>) -> Result<Value> {
        self.get(var, default, Some(Cast::Tuple))
    }

    /// # Errors
    /// See [`Env::get`].
    pub fn json(&self, var: &str, default: impl Into<Fallback>) -> Result<Value> {
        self.get(var, default, Some(Cast::Json))
    }

    /// # Errors
    /// See [`Env::get`].
    pub fn url(&self, var: &str, default: impl Into<Fallback>) -> Result<Value> {
        self.get(var, default, Some(Cast::Url))
    }
}

static ENV: LazyLock<Env> = LazyLock::new(Env::default);

/// Convenience accessor with an empty schema.
#[must_use]
pub fn env() -> &'static Env {
    &ENV
}

fn chars(value: &str) -> impl Iterator<Item = String> + '_ {
    value.chars().map(String::from)
}

fn parse_bool(value: &str) -> bool {
    let lowered = value.to_lowercase();
    BOOLEAN_TRUE_STRINGS.contains(&lowered.as_str())
}

fn parse_int(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits: String = trimmed.chars().filter(|c| *c != '_').collect();
    let well_formed = !unsigned.starts_with('_')
        && !unsigned.ends_with('_')
        && !unsigned.contains("__");

    digits
        .parse::<i64>()
        .ok()
        .filter(|_| well_formed)
        .ok_or_else(|| {
            ConfigurationError::InvalidValue(format!(
                "invalid literal for int() with base 10: '{value}'"
            ))
        })
}

/// Locale-tolerant float: every separator but the last is a grouping character.
fn parse_float(value: &str) -> Result<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let parts: Vec<&str> = cleaned.split([',', '.']).collect();
    let normalized = match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}.{last}", rest.concat()),
        _ => cleaned.clone(),
    };

    normalized.parse::<f64>().map_err(|_| {
        ConfigurationError::InvalidValue(format!(
            "could not convert string to float: '{normalized}'"
        ))
    })
}

/// A string is a sequence of one-character items, so only the empty string
/// converts to a mapping.
fn parse_dict(value: &str) -> Result<BTreeMap<String, String>> {
    match value.chars().count() {
        0 => Ok(BTreeMap::new()),
        _ => Err(ConfigurationError::InvalidValue(
            "dictionary update sequence element #0 has length 1; 2 is required".to_string(),
        )),
    }
}

/// Split a URL into its parts without normalizing any of them.
fn parse_url(value: &str) -> UrlParts {
    let mut parts = UrlParts::default();
    let mut rest = value;

    if let Some((scheme, tail)) = rest.split_once(':') {
        let valid = scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if valid {
            parts.scheme = scheme.to_lowercase();
            rest = tail;
        }
    }

    if let Some(tail) = rest.strip_prefix("//") {
        let end = tail.find(['/', '?', '#']).unwrap_or(tail.len());
        parts.netloc = tail[..end].to_string();
        rest = &tail[end..];
    }

    if let Some((head, fragment)) = rest.split_once('#') {
        parts.fragment = fragment.to_string();
        rest = head;
    }
    if let Some((head, query)) = rest.split_once('?') {
        parts.query = query.to_string();
        rest = head;
    }
    parts.path = rest.to_string();

    if !parts.netloc.is_empty() {
        let (userinfo, hostport) = match parts.netloc.rsplit_once('@') {
            Some((userinfo, hostport)) => (Some(userinfo), hostport),
            None => (None, parts.netloc.as_str()),
        };
        if let Some(userinfo) = userinfo {
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    parts.username = Some(user.to_string());
                    parts.password = Some(pass.to_string());
                }
                None => parts.username = Some(userinfo.to_string()),
            }
        }
        let (host, port) = if hostport.starts_with('[') {
            match hostport.split_once(']') {
                Some((host, tail)) => (
                    host.trim_start_matches('['),
                    tail.strip_prefix(':').and_then(|p| p.parse::<u16>().ok()),
                ),
                None => (hostport, None),
            }
        } else {
            match hostport.rsplit_once(':') {
                Some((host, port)) => (host, port.parse::<u16>().ok()),
                None => (hostport, None),
            }
        };
        parts.hostname = Some(host.to_lowercase()).filter(|h| !h.is_empty());
        parts.port = port;
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_cast_is_truthy_set_membership() {
        for raw in ["true", "TRUE", "On", "ok", "y", "YES", "1"] {
            assert_eq!(Env::cast(raw, Cast::Bool), Ok(Value::Bool(true)), "{raw}");
        }
        for raw in ["nope", "", "false", "0", "no", " yes"] {
            assert_eq!(Env::cast(raw, Cast::Bool), Ok(Value::Bool(false)), "{raw}");
        }
    }

    #[test]
    fn int_cast() {
        assert_eq!(Env::cast("42", Cast::Int), Ok(Value::Int(42)));
        assert_eq!(Env::cast(" -7 ", Cast::Int), Ok(Value::Int(-7)));
        assert_eq!(Env::cast("1_000", Cast::Int), Ok(Value::Int(1000)));
        assert!(matches!(
            Env::cast("abc", Cast::Int),
            Err(ConfigurationError::InvalidValue(msg)) if msg.contains("'abc'")
        ));
        assert!(Env::cast("1__0", Cast::Int).is_err());
        assert!(Env::cast("-_1", Cast::Int).is_err());
        assert!(Env::cast("+_1", Cast::Int).is_err());
        assert!(Env::cast("1_", Cast::Int).is_err());
        assert_eq!(Env::cast("-1_0", Cast::Int), Ok(Value::Int(-10)));
        assert!(Env::cast("", Cast::Int).is_err());
    }

    #[test]
    fn float_cast_handles_both_grouping_styles() {
        assert_eq!(Env::cast("1,234.56", Cast::Float), Ok(Value::Float(1234.56)));
        assert_eq!(Env::cast("1.234,56", Cast::Float), Ok(Value::Float(1234.56)));
        assert_eq!(Env::cast("3.5", Cast::Float), Ok(Value::Float(3.5)));
        assert_eq!(Env::cast("$ 12", Cast::Float), Ok(Value::Float(12.0)));
    }

    #[test]
    fn float_cast_treats_every_separator_but_the_last_as_grouping() {
        // Reads as 1234.567, not 1234567.
        assert_eq!(Env::cast("1.234.567", Cast::Float), Ok(Value::Float(1234.567)));
        assert_eq!(Env::cast("1,234,567", Cast::Float), Ok(Value::Float(1234.567)));
        // The sign is stripped along with every other non-digit.
        assert_eq!(Env::cast("-2.5", Cast::Float), Ok(Value::Float(2.5)));
    }

    #[test]
    fn float_cast_rejects_strings_without_digits() {
        assert!(Env::cast("", Cast::Float).is_err());
        assert!(Env::cast("abc", Cast::Float).is_err());
        assert!(Env::cast(".", Cast::Float).is_err());
    }

    #[test]
    fn sequence_casts_split_into_characters() {
        let expected: Vec<String> = vec!["a".into(), ",".into(), "b".into()];
        assert_eq!(Env::cast("a,b", Cast::List), Ok(Value::List(expected.clone())));
        assert_eq!(Env::cast("a,b", Cast::Tuple), Ok(Value::Tuple(expected)));

        let Ok(Value::Set(set)) = Env::cast("abba", Cast::Set) else {
            panic!("expected a set");
        };
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn dict_cast_only_accepts_empty_string() {
        assert_eq!(Env::cast("", Cast::Dict), Ok(Value::Dict(BTreeMap::new())));
        assert!(matches!(
            Env::cast("a=b", Cast::Dict),
            Err(ConfigurationError::InvalidValue(_))
        ));
    }

    #[test]
    fn json_cast() {
        assert_eq!(
            Env::cast(r#"{"a":1}"#, Cast::Json),
            Ok(Value::Json(serde_json::json!({"a": 1})))
        );
        assert_eq!(
            Env::cast("[1, 2]", Cast::Json),
            Ok(Value::Json(serde_json::json!([1, 2])))
        );
        assert!(Env::cast("{not json", Cast::Json).is_err());
    }

    #[test]
    fn url_cast_extracts_components() {
        let Ok(Value::Url(parts)) = Env::cast(
            "postgres://user:pw@DB.example.com:5432/app?sslmode=require#x",
            Cast::Url,
        ) else {
            panic!("expected url parts");
        };
        assert_eq!(parts.scheme, "postgres");
        assert_eq!(parts.netloc, "user:pw@DB.example.com:5432");
        assert_eq!(parts.hostname.as_deref(), Some("db.example.com"));
        assert_eq!(parts.port, Some(5432));
        assert_eq!(parts.username.as_deref(), Some("user"));
        assert_eq!(parts.password.as_deref(), Some("pw"));
        assert_eq!(parts.path, "/app");
        assert_eq!(parts.query, "sslmode=require");
        assert_eq!(parts.fragment, "x");
    }

    #[test]
    fn url_cast_keeps_components_verbatim() {
        let Ok(Value::Url(parts)) = Env::cast("https://h:443/a/../b", Cast::Url) else {
            panic!("expected url parts");
        };
        assert_eq!(parts.netloc, "h:443");
        assert_eq!(parts.port, Some(443));
        assert_eq!(parts.path, "/a/../b");

        let Ok(Value::Url(parts)) = Env::cast("http://h/a b?q=x y", Cast::Url) else {
            panic!("expected url parts");
        };
        assert_eq!(parts.path, "/a b");
        assert_eq!(parts.query, "q=x y");

        let Ok(Value::Url(parts)) = Env::cast("https://api.spotify.com", Cast::Url) else {
            panic!("expected url parts");
        };
        assert_eq!(parts.hostname.as_deref(), Some("api.spotify.com"));
        assert_eq!(parts.path, "");

        let Ok(Value::Url(parts)) = Env::cast("http://[::1]:8080/", Cast::Url) else {
            panic!("expected url parts");
        };
        assert_eq!(parts.hostname.as_deref(), Some("::1"));
        assert_eq!(parts.port, Some(8080));
    }

    #[test]
    fn schema_default_is_only_read_on_request() {
        let env = Env::new([
            ("WITH_DEFAULT", Spec::with_default(Cast::Int, 5i64)),
            ("CAST_ONLY", Spec::from(Cast::Int)),
        ]);
        assert!(matches!(
            env.schema_default("WITH_DEFAULT"),
            Fallback::Value(Value::Int(5))
        ));
        assert!(matches!(env.schema_default("CAST_ONLY"), Fallback::NotSet));
        assert!(matches!(env.schema_default("UNKNOWN"), Fallback::NotSet));
    }

    #[test]
    fn url_cast_never_fails() {
        let Ok(Value::Url(parts)) = Env::cast("not a url?q=1", Cast::Url) else {
            panic!("expected url parts");
        };
        assert_eq!(parts.scheme, "");
        assert_eq!(parts.path, "not a url");
        assert_eq!(parts.query, "q=1");

        let Ok(Value::Url(parts)) = Env::cast("http://host:notaport/p", Cast::Url) else {
            panic!("expected url parts");
        };
        assert_eq!(parts.scheme, "http");
        assert_eq!(parts.hostname.as_deref(), Some("host"));
        assert_eq!(parts.port, None);
        assert_eq!(parts.path, "/p");

        assert_eq!(Env::cast("", Cast::Url), Ok(Value::Url(UrlParts::default())));
    }

    #[test]
    fn custom_cast_errors_become_configuration_errors() {
        fn even(raw: &str) -> std::result::Result<Value, String> {
            let n: i64 = raw.parse().map_err(|_| format!("{raw} is not a number"))?;
            if n % 2 == 0 {
                Ok(Value::Int(n))
            } else {
                Err(format!("{n} is odd"))
            }
        }

        assert_eq!(Env::cast("4", Cast::Custom(even)), Ok(Value::Int(4)));
        assert_eq!(
            Env::cast("3", Cast::Custom(even)),
            Err(ConfigurationError::InvalidValue("3 is odd".to_string()))
        );
    }

    #[test]
    fn cast_resolution_precedence() {
        let env = Env::new([
            ("FLAG", Spec::from(Cast::Bool)),
            ("LOGIN", Spec::with_default(Cast::Int, 5i64)),
        ]);
        assert!(matches!(env.resolve_cast("FLAG", Some(Cast::Int)), Cast::Int));
        assert!(matches!(env.resolve_cast("FLAG", None), Cast::Bool));
        assert!(matches!(env.resolve_cast("LOGIN", None), Cast::Int));
        assert!(matches!(env.resolve_cast("OTHER", None), Cast::Str));
    }

    #[test]
    fn not_set_error_message() {
        assert_eq!(
            ConfigurationError::NotSet("FOO".to_string()).to_string(),
            "Environment variable 'FOO' not set."
        );
    }

    #[test]
    fn fallback_conversions() {
        assert!(matches!(Fallback::from(()), Fallback::Unspecified));
        assert!(matches!(Fallback::from(NotSet), Fallback::NotSet));
        assert!(matches!(Fallback::from(Value::Null), Fallback::Value(Value::Null)));
        assert!(matches!(Fallback::from(3i64), Fallback::Value(Value::Int(3))));
        assert!(matches!(Fallback::from("x"), Fallback::Value(Value::Str(_))));
    }
}
