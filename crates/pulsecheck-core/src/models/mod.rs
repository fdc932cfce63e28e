pub mod category;
pub mod recommendation;
pub mod report;
pub mod response;
pub mod tier;
