use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

// Embeds every `assets/drawable/*.txt` file as a drawable resource keyed by
// its file stem, e.g. `assets/drawable/profile_picture.txt` → "profile_picture".
fn main() {
    println!("cargo:rerun-if-changed=assets/drawable");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("drawables.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let asset_dir = Path::new("assets").join("drawable");
    if !asset_dir.exists() {
        println!("cargo:warning=no drawable resources found under assets/drawable");
        writeln!(f, "const DRAWABLES: &[(&str, &[&str])] = &[];").unwrap();
        return;
    }

    let mut entries: Vec<_> = fs::read_dir(&asset_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();

    entries.sort();

    writeln!(f, "const DRAWABLES: &[(&str, &[&str])] = &[").unwrap();
    for path in entries {
        let id = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path).unwrap();

        write!(f, "    ({:?}, &[", id).unwrap();
        for line in content.lines() {
            // Trailing whitespace would widen the art without adding pixels.
            write!(f, "{:?}, ", line.trim_end()).unwrap();
        }
        writeln!(f, "]),").unwrap();
    }
    writeln!(f, "];").unwrap();
}
