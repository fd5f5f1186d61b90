//! Column Schema Module
//! Column names of the bike-sharing tables and how each table is typed.

pub const DTEDAY: &str = "dteday";
pub const SEASON: &str = "season";
pub const YR: &str = "yr";
pub const MNTH: &str = "mnth";
pub const HR: &str = "hr";
pub const HOLIDAY: &str = "holiday";
pub const WEEKDAY: &str = "weekday";
pub const WORKINGDAY: &str = "workingday";
pub const WEATHERSIT: &str = "weathersit";
pub const CNT: &str = "cnt";

/// Date format used by the `dteday` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Describes which semantic type each column of a table gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub date: &'static str,
    pub categorical: &'static [&'static str],
    pub boolean: &'static [&'static str],
    pub count: &'static str,
}

impl TableSchema {
    /// All columns the table must provide.
    pub fn required_columns(&self) -> Vec<&'static str> {
        let mut columns = vec![self.date];
        columns.extend_from_slice(self.categorical);
        columns.extend_from_slice(self.boolean);
        columns.push(self.count);
        columns
    }
}

/// One row per hour per day.
pub const HOURLY_SCHEMA: TableSchema = TableSchema {
    name: "hour",
    date: DTEDAY,
    categorical: &[SEASON, YR, MNTH, HR, WEEKDAY, WORKINGDAY, WEATHERSIT],
    boolean: &[HOLIDAY],
    count: CNT,
};

/// One row per day: the hourly fields minus `hr`.
pub const DAILY_SCHEMA: TableSchema = TableSchema {
    name: "day",
    date: DTEDAY,
    categorical: &[SEASON, YR, MNTH, WEEKDAY, WORKINGDAY, WEATHERSIT],
    boolean: &[HOLIDAY],
    count: CNT,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_schema_has_no_hour() {
        assert!(HOURLY_SCHEMA.required_columns().contains(&HR));
        assert!(!DAILY_SCHEMA.required_columns().contains(&HR));
        assert_eq!(
            HOURLY_SCHEMA.required_columns().len(),
            DAILY_SCHEMA.required_columns().len() + 1
        );
    }
}
