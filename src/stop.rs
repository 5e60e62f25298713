//! Plain delivery stop record for hosts that have no model of their own.

use serde::{Deserialize, Serialize};

use crate::traits::{Delivery, TimePreference};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub preference: TimePreference,
    #[serde(default)]
    pub order: Option<usize>,
}

impl Stop {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: None,
            latitude,
            longitude,
            preference: TimePreference::NoPreference,
            order: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_preference(mut self, preference: TimePreference) -> Self {
        self.preference = preference;
        self
    }
}

impl Delivery for Stop {
    fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    fn preference(&self) -> TimePreference {
        self.preference
    }

    fn order(&self) -> Option<usize> {
        self.order
    }

    fn set_order(&mut self, order: Option<usize>) {
        self.order = order;
    }
}
