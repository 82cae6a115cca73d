pub mod in_memory_store;
pub mod supabase_client;

pub use in_memory_store::InMemoryContentStore;
pub use supabase_client::SupabaseClient;
