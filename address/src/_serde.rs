use super::BaseUrl;
use serde::{
    de::{Error, Unexpected},
    Deserialize, Serialize,
};

impl<'a> Deserialize<'a> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let inner = String::deserialize(deserializer)?;
        BaseUrl::new(&inner).map_err(|err| {
            D::Error::invalid_value(Unexpected::Str(&inner), &err.0.as_str())
        })
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_str().serialize(serializer)
    }
}
