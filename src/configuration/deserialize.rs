pub mod base64_property {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        base64::decode(encoded).map_err(|err| D::Error::custom(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_derive::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(with = "super::base64_property")]
        data: Vec<u8>,
    }

    #[test]
    fn test_null_decodes_to_empty_bytes() {
        let holder: Holder = serde_json::from_str(r#"{ "data": null }"#).unwrap();
        assert!(holder.data.is_empty());
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let holder = serde_json::from_str::<Holder>(r#"{ "data": "%%%" }"#);
        assert!(holder.is_err());
    }
}
