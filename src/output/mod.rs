// Output formatting — terminal rendering of profiles and assessments.

pub mod terminal;
