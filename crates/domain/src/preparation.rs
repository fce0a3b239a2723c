use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: ID,
    pub project_id: ID,
    pub name: String,
    pub rent_daily_eur: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Facility {
    /// Rent over the booked period, zero when the period is open ended.
    pub fn total_rent_eur(&self) -> f64 {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => {
                let days = end.signed_duration_since(start).num_days().max(0);
                self.rent_daily_eur * days as f64
            }
            _ => 0.0,
        }
    }
}

impl Entity<ID> for Facility {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HousingUnit {
    pub id: ID,
    pub project_id: ID,
    pub address: String,
    pub rent_daily_eur: f64,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
}

impl HousingUnit {
    pub fn total_rent_eur(&self) -> f64 {
        match (self.check_in_date, self.check_out_date) {
            (Some(check_in), Some(check_out)) => {
                let days = check_out.signed_duration_since(check_in).num_days().max(0);
                self.rent_daily_eur * days as f64
            }
            _ => 0.0,
        }
    }
}

impl Entity<ID> for HousingUnit {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkEntry {
    pub id: ID,
    pub project_id: ID,
    pub date: NaiveDate,
    pub labor_cost_eur: f64,
}

impl Entity<ID> for WorkEntry {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd(y, m, d)
    }

    #[test]
    fn facility_rent_is_daily_rate_times_days() {
        let facility = Facility {
            id: Default::default(),
            project_id: Default::default(),
            name: "Site office".into(),
            rent_daily_eur: 40.0,
            start_date: Some(date(2024, 3, 1)),
            end_date: Some(date(2024, 3, 11)),
        };
        assert_eq!(facility.total_rent_eur(), 400.0);
    }

    #[test]
    fn open_ended_facility_rent_is_zero() {
        let facility = Facility {
            id: Default::default(),
            project_id: Default::default(),
            name: "Container".into(),
            rent_daily_eur: 40.0,
            start_date: Some(date(2024, 3, 1)),
            end_date: None,
        };
        assert_eq!(facility.total_rent_eur(), 0.0);
    }
}
