//! Event Registry
//!
//! Per-element record of observed events. Each (element, event name,
//! handler) triple owns exactly one responder and therefore one native
//! subscription; repeating a registration changes nothing.

use std::collections::HashMap;

use veneer_dom::{Document, DomError, NodeId};

use crate::{CleanupCache, EventError, Handler, Responder};

/// Responders of one element, by event name, in registration order
type ElementEntry = HashMap<String, Vec<Responder>>;

/// Outcome of a teardown sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Elements whose responders were all detached
    pub swept: usize,
    /// Elements whose detachment failed part way
    pub failed: usize,
    /// Elements already gone from the document
    pub skipped: usize,
}

/// Registry of observed elements.
///
/// Created empty; elements enter on their first observation and stay
/// tracked until [`EventRegistry::teardown`] sweeps them.
#[derive(Debug, Default)]
pub struct EventRegistry {
    elements: HashMap<NodeId, ElementEntry>,
    cache: CleanupCache,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe `event_name` on `element` with `handler`.
    ///
    /// Observing the same handler twice is a no-op, as is an empty event
    /// name. Distinct handlers run in registration order.
    pub fn observe(
        &mut self,
        doc: &mut Document,
        element: NodeId,
        event_name: &str,
        handler: &Handler,
    ) -> Result<NodeId, EventError> {
        if event_name.is_empty() {
            tracing::debug!("Ignoring observation of an unnamed event on {:?}", element);
            return Ok(element);
        }

        let weak = doc.weak(element)?;
        if self.responder_index(element, event_name, handler).is_some() {
            return Ok(element);
        }

        let responder = Responder::new(doc.quirks(), element, event_name, handler.clone());
        responder.attach(doc)?;
        tracing::debug!(
            "Observing {} on {:?} via {:?}",
            event_name,
            element,
            responder.strategy()
        );
        self.cache.track(weak);
        self.elements
            .entry(element)
            .or_default()
            .entry(event_name.to_string())
            .or_default()
            .push(responder);

        Ok(element)
    }

    /// Stop observing.
    ///
    /// - name and handler: remove that one registration
    /// - name only: remove every registration for the name
    /// - neither: remove every registration on the element
    ///
    /// Unknown elements, names and handlers are ignored. The handler must
    /// be the one passed to [`observe`](Self::observe) (or a clone of it).
    pub fn stop_observing(
        &mut self,
        doc: &mut Document,
        element: NodeId,
        event_name: Option<&str>,
        handler: Option<&Handler>,
    ) -> Result<NodeId, EventError> {
        let Some(entry) = self.elements.get_mut(&element) else {
            return Ok(element);
        };

        let result = match (event_name, handler) {
            (Some(name), Some(handler)) => match entry.get_mut(name) {
                Some(responders) => match responders.iter().position(|r| r.handler() == handler) {
                    Some(index) => {
                        let detached = responders[index].detach(doc);
                        if detached.is_ok() {
                            responders.remove(index);
                            tracing::debug!("Stopped observing {} on {:?}", name, element);
                        }
                        detached
                    }
                    None => Ok(()),
                },
                None => Ok(()),
            },
            (Some(name), None) => match entry.get_mut(name) {
                Some(responders) => {
                    let detached = detach_all(doc, responders);
                    tracing::debug!("Stopped observing all {} on {:?}", name, element);
                    detached
                }
                None => Ok(()),
            },
            (None, _) => {
                let detached = entry
                    .values_mut()
                    .try_for_each(|responders| detach_all(doc, responders));
                tracing::debug!("Stopped observing everything on {:?}", element);
                detached
            }
        };

        entry.retain(|_, responders| !responders.is_empty());
        if entry.is_empty() {
            self.elements.remove(&element);
        }
        result?;
        Ok(element)
    }

    /// Number of registrations on an element, for one name or all of them
    pub fn responder_count(&self, element: NodeId, event_name: Option<&str>) -> usize {
        let Some(entry) = self.elements.get(&element) else {
            return 0;
        };
        match event_name {
            Some(name) => entry.get(name).map_or(0, Vec::len),
            None => entry.values().map(Vec::len).sum(),
        }
    }

    fn responder_index(&self, element: NodeId, event_name: &str, handler: &Handler) -> Option<usize> {
        self.elements
            .get(&element)?
            .get(event_name)?
            .iter()
            .position(|r| r.handler() == handler)
    }

    /// Whether an element has ever been observed (and not swept since)
    pub fn is_tracked(&self, element: NodeId) -> bool {
        self.cache.contains(element)
    }

    pub fn cache(&self) -> &CleanupCache {
        &self.cache
    }

    /// Drop the records of elements removed from the document
    pub fn prune(&mut self, doc: &Document) -> usize {
        let dead = self.cache.prune(doc);
        for id in &dead {
            self.elements.remove(id);
        }
        dead.len()
    }

    /// Detach every responder of every observed element.
    ///
    /// Failures are logged and skipped so one element (a cross-origin
    /// frame, say) cannot keep the others attached. The registry is empty
    /// afterwards.
    pub fn teardown(&mut self, doc: &mut Document) -> SweepStats {
        let mut stats = SweepStats::default();

        for weak in self.cache.take() {
            let element = weak.id();
            if !doc.is_alive(weak) {
                stats.skipped += 1;
            } else {
                match self.stop_observing(doc, element, None, None) {
                    Ok(_) => stats.swept += 1,
                    Err(err) => {
                        tracing::warn!("Failed to detach listeners of {:?}: {}", element, err);
                        stats.failed += 1;
                    }
                }
            }
            self.elements.remove(&element);
        }

        tracing::debug!(
            "Teardown swept {} elements ({} failed, {} gone)",
            stats.swept,
            stats.failed,
            stats.skipped
        );
        stats
    }

    /// Signal unload to the page, then sweep
    pub fn unload(&mut self, doc: &mut Document) -> SweepStats {
        doc.unload();
        self.teardown(doc)
    }
}

/// Detach responders front to back, dropping each once it is detached
fn detach_all(doc: &mut Document, responders: &mut Vec<Responder>) -> Result<(), DomError> {
    while let Some(responder) = responders.first() {
        responder.detach(doc)?;
        responders.remove(0);
    }
    Ok(())
}
