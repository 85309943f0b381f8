use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
/// Something that can show a saved file to the user.
pub trait ViewerHook {
    fn open(&self, path: &Path) -> io::Result<()>;
}
/// Hands the file to the platform's default application.
pub struct SystemViewer;
impl ViewerHook for SystemViewer {
    fn open(&self, path: &Path) -> io::Result<()> {
        let mut command = if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        } else if cfg!(target_os = "macos") {
            Command::new("open")
        } else {
            Command::new("xdg-open")
        };
        command
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}
/// Headless runs.
pub struct NoViewer;
impl ViewerHook for NoViewer {
    fn open(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}
