//! Profile module - Respondent demographics.

mod demographics;

pub use demographics::{
    BusinessStage, Demographics, Industry, OrganizationType, Region, TeamSize,
};
