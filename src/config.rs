use std::sync::atomic::{AtomicUsize, Ordering};

struct Config {
    build_threads: AtomicUsize,
    build_chunk_log2: AtomicUsize,
}

/// `build_threads == 0` means "use available parallelism".
static CONFIG: Config = Config {
    build_threads: AtomicUsize::new(0),
    build_chunk_log2: AtomicUsize::new(14),
};

pub struct ConfigSnapshot {
    /// Worker threads used to fill one level of a lifting table.
    pub build_threads: usize,
    /// Levels smaller than `2^build_chunk_log2` rows are filled on the calling thread.
    pub build_chunk_log2: u32,
}

pub fn get_config() -> ConfigSnapshot {
    let build_threads = match CONFIG.build_threads.load(Ordering::Relaxed) {
        0 => std::thread::available_parallelism().map_or(1, |n| n.get()),
        n => n,
    };
    ConfigSnapshot {
        build_threads,
        build_chunk_log2: CONFIG.build_chunk_log2.load(Ordering::Relaxed) as u32,
    }
}

/// Sets the number of threads used to build lifting tables (`0` restores the default).
pub fn set_build_threads(threads: usize) {
    CONFIG.build_threads.store(threads, Ordering::Relaxed);
}

pub fn set_build_chunk_log2(chunk_log2: u32) {
    CONFIG
        .build_chunk_log2
        .store(chunk_log2 as usize, Ordering::Relaxed);
}
