pub mod group;
pub mod group_detail;
pub mod soccer_match;
pub mod tournament;
