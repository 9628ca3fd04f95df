//! Query string assembly for Open-Meteo requests

/// Ordered set of query parameters for a single request
///
/// Parameters keep call order. Array-valued parameters are joined with
/// commas, the form every Open-Meteo endpoint expects for variable
/// lists (`hourly=temperature_2m,rain`).
#[derive(Debug, Clone, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Start a query anchored at a coordinate pair
    pub(crate) fn for_location(latitude: f64, longitude: f64) -> Self {
        let mut query = Self::new();
        query.set("latitude", latitude);
        query.set("longitude", longitude);
        query
    }

    /// Append a single parameter
    pub(crate) fn set(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append a parameter only when a value is present
    pub(crate) fn opt(&mut self, key: &'static str, value: Option<impl ToString>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Append a comma-joined list parameter
    pub(crate) fn list<S: AsRef<str>>(&mut self, key: &'static str, values: &[S]) -> &mut Self {
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        self.pairs.push((key, joined));
        self
    }

    /// Append a comma-joined list parameter only when present
    pub(crate) fn opt_list<S: AsRef<str>>(
        &mut self,
        key: &'static str,
        values: Option<&[S]>,
    ) -> &mut Self {
        if let Some(values) = values {
            self.list(key, values);
        }
        self
    }

    /// Assembled pairs, ready for `reqwest::RequestBuilder::query`
    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn value_of<'a>(query: &'a Query, key: &str) -> Option<&'a str> {
        query
            .pairs()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_for_location_sets_coordinates() {
        let query = Query::for_location(52.52, 13.41);
        assert_eq!(value_of(&query, "latitude"), Some("52.52"));
        assert_eq!(value_of(&query, "longitude"), Some("13.41"));
    }

    #[test]
    fn test_opt_skips_missing_values() {
        let mut query = Query::new();
        query.opt("forecast_days", Some(7_u8));
        query.opt("past_days", None::<u8>);

        assert_eq!(value_of(&query, "forecast_days"), Some("7"));
        assert_eq!(value_of(&query, "past_days"), None);
    }

    #[test]
    fn test_list_joins_with_commas() {
        let mut query = Query::new();
        query.list("hourly", &["temperature_2m", "rain", "snowfall"]);
        assert_eq!(
            value_of(&query, "hourly"),
            Some("temperature_2m,rain,snowfall")
        );
    }

    #[test]
    fn test_list_single_element_has_no_comma() {
        let mut query = Query::new();
        query.list("daily", &["temperature_2m_max"]);
        assert_eq!(value_of(&query, "daily"), Some("temperature_2m_max"));
    }

    #[test]
    fn test_empty_list_produces_empty_value() {
        let mut query = Query::new();
        query.list("hourly", &[] as &[&str]);
        assert_eq!(value_of(&query, "hourly"), Some(""));
    }

    #[test]
    fn test_opt_list_skips_missing_values() {
        let vars = vec!["wave_height".to_string()];
        let mut query = Query::new();
        query.opt_list("hourly", Some(vars.as_slice()));
        query.opt_list("daily", None::<&[String]>);

        assert_eq!(value_of(&query, "hourly"), Some("wave_height"));
        assert_eq!(value_of(&query, "daily"), None);
    }

    #[test]
    fn test_dates_format_as_iso() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
        let mut query = Query::new();
        query.set("start_date", start);
        assert_eq!(value_of(&query, "start_date"), Some("2024-01-05"));
    }

    #[test]
    fn test_pairs_keep_insertion_order() {
        let mut query = Query::for_location(1.0, 2.0);
        query.set("timezone", "auto");
        let keys: Vec<_> = query.pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["latitude", "longitude", "timezone"]);
    }
}
