mod vote_store;

pub use vote_store::PostgresVoteStore;
