use std::{
    fmt,
    path::{Path, PathBuf},
    rc::Rc,
};

/// A texture that has already been decoded and uploaded by the host.
pub trait Texture: fmt::Debug {
    /// Activates the texture on the given texture unit.
    fn bind(&self, unit: u32);
}

/// Loads textures from composed resource paths.
///
/// Whether the file exists, decodes, or fits on the GPU is entirely the
/// loader's business; errors are passed through unchanged.
pub trait TextureLoader {
    fn load(&self, path: &Path) -> anyhow::Result<Rc<dyn Texture>>;
}

impl<F> TextureLoader for F
where
    F: Fn(&Path) -> anyhow::Result<Rc<dyn Texture>>,
{
    fn load(&self, path: &Path) -> anyhow::Result<Rc<dyn Texture>> {
        self(path)
    }
}

/**
 * Builds `<library><name><separator><token>.<extension>`.
 *
 * `library` is a plain prefix and is not joined as a directory, so a library
 * of `assets/` or `assets/brick_` is used as is. Without it the file name is
 * returned as a relative path. `token` is the material channel name, e.g.
 * `albedo`.
 */
pub fn compose_texture_path(
    library: Option<&Path>,
    name: &str,
    separator: &str,
    token: &str,
    extension: &str,
) -> PathBuf {
    let file_name = format!("{name}{separator}{token}.{extension}");
    let mut path = library.map(|library| library.as_os_str().to_owned()).unwrap_or_default();
    path.push(file_name);
    PathBuf::from(path)
}
