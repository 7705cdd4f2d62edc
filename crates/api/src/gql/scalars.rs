use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use uuid::Uuid;

/// `UUID` scalar: hyphenated 8-4-4-4-12 hex, any case on input, lowercase on
/// output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UuidScalar(pub Uuid);

fn parse_hyphenated(s: &str) -> Option<Uuid> {
    // `Uuid::try_parse` also accepts the simple, braced and urn spellings;
    // only the 36-char form is hyphenated.
    if s.len() != 36 {
        return None;
    }
    Uuid::try_parse(s).ok()
}

#[Scalar(name = "UUID")]
impl ScalarType for UuidScalar {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(s) => parse_hyphenated(s)
                .map(UuidScalar)
                .ok_or_else(|| InputValueError::custom(format!("`{s}` is not a valid UUID"))),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn is_valid(value: &Value) -> bool {
        matches!(value, Value::String(s) if parse_hyphenated(s).is_some())
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.hyphenated().to_string())
    }
}

impl From<Uuid> for UuidScalar {
    fn from(id: Uuid) -> Self {
        UuidScalar(id)
    }
}

impl From<UuidScalar> for Uuid {
    fn from(id: UuidScalar) -> Self {
        id.0
    }
}
