use chrono::NaiveDateTime;

/// Identifying information printed at the top of a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    table: Option<String>,
    hand: String,
    day: Option<u32>,
    played: Option<NaiveDateTime>,
}

impl Header {
    pub fn new(
        table: Option<String>,
        hand: String,
        day: Option<u32>,
        played: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            table,
            hand,
            day,
            played,
        }
    }
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }
    /// Hand number as printed.
    pub fn hand(&self) -> &str {
        &self.hand
    }
    /// Tournament day, where the layout prints one.
    pub fn day(&self) -> Option<u32> {
        self.day
    }
    /// When the hand started, from the header or the first timestamped line.
    pub fn played(&self) -> Option<NaiveDateTime> {
        self.played
    }
    /// `table_hand` when the table is known, otherwise the hand number.
    pub fn key(&self) -> String {
        match &self.table {
            Some(table) => format!("{}_{}", table, self.hand),
            None => self.hand.clone(),
        }
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.key())?;
        if let Some(day) = self.day {
            write!(f, " day {}", day)?;
        }
        if let Some(played) = self.played {
            write!(f, " @ {}", played)?;
        }
        Ok(())
    }
}
