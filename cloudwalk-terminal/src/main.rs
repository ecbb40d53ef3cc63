//! Cloudwalk Terminal Demo - First-Person Point Cloud Walkthrough
//!
//! Two dot spheres hang in front of the starting position. Controls:
//!   - W/S: Forward / Back     - A/D: Left / Right    - R/F: Up / Down
//!   - I/K: Pitch              - J/L: Yaw             - U/O: Roll
//!   - 0: Reset view           - Q/ESC: Quit

use cloudwalk_core::{dot_sphere, PointCloud, Vector3};
use cloudwalk_terminal::TerminalApp;
use std::io;

fn main() -> io::Result<()> {
    let mut cloud = PointCloud::new();
    cloud.extend(&dot_sphere(50.0, 5, 10, Vector3::new(0.0, 0.0, 200.0)));
    cloud.extend(&dot_sphere(50.0, 5, 7, Vector3::new(50.0, 50.0, 300.0)));

    let mut app = TerminalApp::new(cloud)?;
    app.run()?;

    println!("Thank you for walking the cloud!");
    Ok(())
}
