use alloc::string::String;
use alloc::vec::Vec;

use slideshow::{Input, Key, KeyScope, Outcome, SlideshowOptions};

use crate::{KeyBroadcast, Mounted, Stage, SubscriberId};

/// The hosting page: finds containers and exposes the address fragment.
pub trait Page {
    type Stage: Stage;

    /// Returns one stage per element matching `selector`, in document order.
    fn query_containers(&mut self, selector: &str) -> Vec<Self::Stage>;

    /// The current address fragment, with or without the leading `#`.
    fn fragment(&self) -> Option<String>;
}

/// All slideshows on a page.
///
/// Each matched container gets its own independent [`Mounted`] instance. Instances in
/// [`KeyScope::Document`] mode are subscribed to a shared [`KeyBroadcast`], so a page-level
/// key press reaches every one of them.
#[derive(Debug)]
pub struct Presentation<S> {
    instances: Vec<Mounted<S>>,
    subscriptions: Vec<Option<SubscriberId>>,
    keys: KeyBroadcast<usize>,
}

impl<S: Stage> Presentation<S> {
    /// Mounts a slideshow on every container matching `selector`.
    ///
    /// The fragment is read once and applied to every instance. Containers without slides are
    /// skipped.
    pub fn mount_all<P>(
        page: &mut P,
        selector: &str,
        options: &SlideshowOptions,
        now_ms: u64,
    ) -> Self
    where
        P: Page<Stage = S>,
    {
        let fragment = page.fragment();
        let containers = page.query_containers(selector);
        sdebug!(selector, containers = containers.len(), "Presentation::mount_all");

        let mut out = Self {
            instances: Vec::with_capacity(containers.len()),
            subscriptions: Vec::with_capacity(containers.len()),
            keys: KeyBroadcast::new(),
        };
        for stage in containers {
            match Mounted::mount(stage, options.clone(), fragment.as_deref(), now_ms) {
                Ok(m) => {
                    out.push(m);
                }
                Err(_err) => {
                    swarn!(err = %_err, "skipping container");
                }
            }
        }
        out
    }

    /// Adds an already mounted instance. Returns its index.
    pub fn push(&mut self, mounted: Mounted<S>) -> usize {
        let index = self.instances.len();
        let subscription = match mounted.key_scope() {
            KeyScope::Document => Some(self.keys.subscribe(index)),
            KeyScope::Container => None,
        };
        self.instances.push(mounted);
        self.subscriptions.push(subscription);
        index
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Mounted<S>> {
        self.instances.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Mounted<S>> {
        self.instances.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mounted<S>> + '_ {
        self.instances.iter()
    }

    pub fn key_broadcast(&self) -> &KeyBroadcast<usize> {
        &self.keys
    }

    /// Stops routing page-level keys to instance `index`. Returns `false` if it was not
    /// subscribed.
    pub fn unsubscribe_keys(&mut self, index: usize) -> bool {
        let Some(slot) = self.subscriptions.get_mut(index) else {
            return false;
        };
        match slot.take() {
            Some(id) => self.keys.unsubscribe(id),
            None => false,
        }
    }

    /// Routes an event observed on container `index`.
    pub fn dispatch(&mut self, index: usize, input: Input, now_ms: u64) -> Option<Outcome> {
        let m = self.instances.get_mut(index)?;
        Some(m.dispatch(input, now_ms))
    }

    /// Delivers a page-level key press to every subscribed instance.
    ///
    /// Returns how many instances navigated.
    pub fn dispatch_document_key(&mut self, key: Key, now_ms: u64) -> usize {
        let input = Input::Key {
            key,
            origin: KeyScope::Document,
        };
        let instances = &mut self.instances;
        let mut navigated = 0;
        self.keys.broadcast(|&index| {
            let Some(m) = instances.get_mut(index) else {
                return;
            };
            if matches!(m.dispatch(input, now_ms), Outcome::Navigated { .. }) {
                navigated += 1;
            }
        });
        navigated
    }

    /// Advances autoplay on every instance. Returns the total number of elapsed periods.
    pub fn tick(&mut self, now_ms: u64) -> u64 {
        self.instances.iter_mut().map(|m| m.tick(now_ms)).sum()
    }

    pub fn into_instances(self) -> Vec<Mounted<S>> {
        self.instances
    }
}
