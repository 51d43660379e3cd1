//! Empty book table for canons that lack one of the two sections.

use crate::BookSpec;

pub const BOOKS: &[BookSpec<'static>] = &[];
