//! Default names and paths for the build-and-render pipeline.

/// Build system invoked for the configure and compile steps.
pub const BUILD_TOOL: &str = "cmake";

/// Build directory, relative to the project root.
pub const BUILD_DIR: &str = "build";

/// Release output subdirectory inside the build directory.
pub const RELEASE_SUBDIR: &str = "Release";

/// Image file the raytracer writes into the release directory.
pub const RENDER_OUTPUT: &str = "out.ppm";

/// Converted image, written relative to the project root.
pub const CONVERTED_OUTPUT: &str = "output.jpg";

/// Name of the raytracer executable produced by the build.
///
/// Invoked with the release directory as working directory, so the
/// non-Windows form carries an explicit `./` prefix.
pub fn executable() -> &'static str {
    #[cfg(windows)]
    {
        "raytracer.exe"
    }

    #[cfg(not(windows))]
    {
        "./raytracer"
    }
}
