use std::collections::HashMap;

use anyhow::{Result, bail, ensure};
use ratatui::Frame;
use tracing::info;

use super::{Scene, SceneId};
use crate::input::FrameInput;

/// Owns every scene and dispatches update/draw to the current one
pub struct SceneRegistry {
    scenes: Vec<Box<dyn Scene>>,
    index: HashMap<SceneId, usize>,
    current: usize,
}

impl SceneRegistry {
    /// The first scene becomes current. Ids must be unique.
    pub fn new(scenes: Vec<Box<dyn Scene>>) -> Result<Self> {
        ensure!(!scenes.is_empty(), "scene registry needs at least one scene");

        let mut index = HashMap::with_capacity(scenes.len());
        for (i, scene) in scenes.iter().enumerate() {
            if index.insert(scene.id(), i).is_some() {
                bail!("duplicate scene name {}", scene.id());
            }
        }

        Ok(Self {
            scenes,
            index,
            current: 0,
        })
    }

    pub fn current(&self) -> SceneId {
        self.scenes[self.current].id()
    }

    pub fn contains(&self, id: SceneId) -> bool {
        self.index.contains_key(&id)
    }

    /// Apply the current scene's pending request, then update the scene that
    /// is current afterwards (the newly entered one on a transition).
    ///
    /// A request for a scene that was never registered is an error.
    pub fn update(&mut self, input: &FrameInput) -> Result<()> {
        if let Some(target) = self.scenes[self.current].take_request() {
            let from = self.current();
            let Some(&next) = self.index.get(&target) else {
                bail!("scene {from} requested unknown scene {target}");
            };
            info!(%from, to = %target, "scene transition");
            self.current = next;
            self.scenes[next].on_enter();
        }

        self.scenes[self.current].update(input);
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.scenes[self.current].draw(frame);
    }
}
