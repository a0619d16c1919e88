use std::fs;
use std::io;
use tempext::{temp_dir, temp_file};

fn main() -> io::Result<()> {
    // Create a working directory with a unique name, then fill it with uniquely named files.
    let work = temp_dir("", "work_")?;
    println!("Working in {}", work.display());

    for ext in ["csv", ".json", ""] {
        let file = temp_file(&work, "part_", ext)?;
        println!("  {}", file.path().display());
    }

    // Errors convert into `io::Error` without losing their kind.
    let missing = work.join("missing");
    match temp_dir(&missing, "x") {
        Err(e) if e.is_not_found() => println!("{} does not exist", e.path().display()),
        other => println!("unexpected: {other:?}"),
    }

    fs::remove_dir_all(&work)
}
