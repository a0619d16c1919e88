use std::fs;
use std::io::{self, Read, Seek, SeekFrom, Write};
use tempext::temp_file;

fn main() -> io::Result<()> {
    // Create a file named like "notes_<number>.txt" in the system's temp directory.
    let mut temp_file = temp_file("", "notes_", "txt")?;
    println!("Created {}", temp_file.path().display());

    // The handle is open for reading and writing.
    write!(temp_file, "Hello, temporary world!")?;
    temp_file.seek(SeekFrom::Start(0))?;
    let mut content = String::new();
    temp_file.read_to_string(&mut content)?;
    println!("Temp file content: {content}");

    // Nothing is cleaned up for us; remove the file ourselves.
    let path = temp_file.into_path()?;
    fs::remove_file(path)
}
