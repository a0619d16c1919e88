use tempext::{Builder, NameCounter, TempError};

fn main() -> Result<(), TempError> {
    // A private counter gives a predictable sequence of names.
    let counter = NameCounter::with_seed(1000);
    let builder = Builder::new()
        .prefix("batch_")
        .suffix("dat")
        .attempts(100)
        .counter(&counter);

    let dir = Builder::new().prefix("batches_").tempdir()?;
    for _ in 0..3 {
        let file = builder.tempfile_in(&dir)?;
        println!("{}", file.path().display());
    }

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}
