use anyhow::Result;

/// Every command does at most one read and one write, so a single thread is all we need.
pub fn single_thread_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
