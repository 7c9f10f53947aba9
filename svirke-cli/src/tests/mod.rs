//! Shared test harness modules for the Svirke CLI.

use super::*;

mod helpers;
mod nearby_unit;
