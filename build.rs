#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Only embed the icon when it is shipped alongside the sources
    if !std::path::Path::new("res/rstudyplan.ico").exists() {
        return;
    }

    let mut res = WindowsResource::new();
    res.set_icon("res/rstudyplan.ico")
        .set("FileDescription", "rStudyplan CLI")
        .set("ProductName", "rStudyplan")
        .set("OriginalFilename", "rstudyplan.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
