mod listing;
mod page;
mod topics;

pub use listing::present_code_listing;
pub use page::present_page;
pub use topics::present_topic_list;
