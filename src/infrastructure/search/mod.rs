mod serper_search;

pub use serper_search::SerperSearchTool;
