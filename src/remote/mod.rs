// pocketbin remote layer
// HTTP client for the Feedbin API behind the BookmarkSubmitter trait.

pub mod feedbin_client;
