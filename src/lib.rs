/// Use mimalloc as the global allocator for all binaries.
/// The word tables allocate one small String per distinct word per worker,
/// which is where mimalloc's thread-local caching pays off.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod common;
pub mod tally;
