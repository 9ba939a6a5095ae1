//! Registry of shader programs and their per-frame configuration state.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    rc::Rc,
};

use crate::{
    error::ShaderError,
    pipelines::{
        configuration::ShaderConfiguration,
        program::{ShaderId, ShaderProgram},
    },
};

/**
 * Tracks the known shader programs and which of them already received the
 * current frame's shared [`ShaderConfiguration`].
 *
 * A program starts every frame unconfigured. The first
 * [`configure_shader`](Self::configure_shader) call for it loads the
 * configuration; later calls in the same frame do nothing until
 * [`clear_draw_configurations`](Self::clear_draw_configurations) starts the
 * next frame.
 */
#[derive(Default)]
pub struct ShaderManager {
    registered: HashMap<ShaderId, Rc<dyn ShaderProgram>>,
    configured: HashSet<ShaderId>,
    active: Option<ShaderId>,
}

impl ShaderManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `program` under its id, replacing an earlier registration.
    pub fn register_shader(&mut self, program: Rc<dyn ShaderProgram>) {
        let id = program.id();
        log::debug!("Registering shader {} ({})", id, program.debug_name());
        if self.registered.insert(id, program).is_some() {
            log::debug!("Shader {id} was registered before and got replaced");
            // the replacement has neither been activated nor seen this frame's configuration
            self.configured.remove(&id);
            if self.active == Some(id) {
                self.active = None;
            }
        }
    }

    /// Activates the program unless it is already the active one.
    pub fn use_shader(&mut self, id: ShaderId) -> Result<(), ShaderError> {
        if self.active == Some(id) {
            return Ok(());
        }
        let program = self.registered.get(&id).ok_or(ShaderError::Unregistered(id))?;
        program.activate();
        self.active = Some(id);
        Ok(())
    }

    /**
     * Loads `configuration` into program `id` if that has not happened yet
     * this frame.
     *
     * Returns whether the configuration was pushed by this call. Fails
     * without pushing anything if `id` was never registered.
     */
    pub fn configure_shader(
        &mut self,
        configuration: &ShaderConfiguration,
        id: ShaderId,
    ) -> Result<bool, ShaderError> {
        if self.configured.contains(&id) {
            return Ok(false);
        }
        let program = self.registered.get(&id).ok_or(ShaderError::Unregistered(id))?;
        log::trace!(
            "Loading {} shared uniforms into shader {} ({})",
            configuration.len(),
            id,
            program.debug_name()
        );
        configuration.load_into(&**program);
        self.configured.insert(id);
        Ok(true)
    }

    /// Marks every program unconfigured. Call once at the start of a frame.
    pub fn clear_draw_configurations(&mut self) {
        self.configured.clear();
    }

    pub fn shader(&self, id: ShaderId) -> Option<Rc<dyn ShaderProgram>> {
        self.registered.get(&id).cloned()
    }

    pub fn is_registered(&self, id: ShaderId) -> bool {
        self.registered.contains_key(&id)
    }

    pub fn is_configured(&self, id: ShaderId) -> bool {
        self.configured.contains(&id)
    }

    pub fn active_shader(&self) -> Option<ShaderId> {
        self.active
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

impl fmt::Debug for ShaderManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderManager")
            .field("registered", &self.registered.keys().collect::<Vec<_>>())
            .field("configured", &self.configured)
            .field("active", &self.active)
            .finish()
    }
}
