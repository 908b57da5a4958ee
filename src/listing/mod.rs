// Listing presentation: client-side sorting of the current result page.

pub mod sort;
