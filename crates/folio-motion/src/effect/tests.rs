//! Lifecycle tests against a recording backend.

use std::cell::RefCell;
use std::rc::Rc;

use folio_common::EffectError;
use folio_config::schema::HaloConfig;

use super::*;

#[derive(Debug, Default)]
struct Calls {
    constructed: Vec<&'static str>,
    destroyed: Vec<u32>,
    options: Option<HaloConfig>,
}

/// Records every call; hands out increasing handle ids.
struct RecordingBackend {
    calls: Rc<RefCell<Calls>>,
    next_id: u32,
    available: bool,
}

impl RecordingBackend {
    fn new() -> (Self, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let backend = Self {
            calls: Rc::clone(&calls),
            next_id: 1,
            available: true,
        };
        (backend, calls)
    }

    fn unavailable() -> (Self, Rc<RefCell<Calls>>) {
        let (mut backend, calls) = Self::new();
        backend.available = false;
        (backend, calls)
    }
}

impl EffectBackend for RecordingBackend {
    type Mount = &'static str;
    type Handle = u32;

    fn construct(&mut self, mount: &&'static str, options: &HaloConfig) -> Result<u32, EffectError> {
        if !self.available {
            return Err(EffectError::LibraryUnavailable("VANTA is not defined".into()));
        }
        let mut calls = self.calls.borrow_mut();
        calls.constructed.push(*mount);
        calls.options = Some(options.clone());
        let id = self.next_id;
        self.next_id += 1;
        Ok(id)
    }

    fn destroy(&mut self, handle: u32) {
        self.calls.borrow_mut().destroyed.push(handle);
    }
}

fn lifecycle() -> (EffectLifecycle<RecordingBackend>, Rc<RefCell<Calls>>) {
    let (backend, calls) = RecordingBackend::new();
    (EffectLifecycle::new(backend, HaloConfig::default()), calls)
}

#[test]
fn starts_uninitialized() {
    let (effect, calls) = lifecycle();
    assert_eq!(effect.phase(), EffectPhase::Uninitialized);
    assert!(!effect.dependencies_ready());
    assert!(calls.borrow().constructed.is_empty());
}

#[test]
fn mount_alone_does_not_activate() {
    let (mut effect, calls) = lifecycle();
    assert_eq!(effect.attach_mount("bg"), EffectPhase::Uninitialized);
    assert!(calls.borrow().constructed.is_empty());
}

#[test]
fn readiness_alone_does_not_activate() {
    let (mut effect, calls) = lifecycle();
    assert_eq!(effect.mark_dependencies_ready(), EffectPhase::Uninitialized);
    assert!(calls.borrow().constructed.is_empty());
}

#[test]
fn activates_when_mount_then_ready() {
    let (mut effect, calls) = lifecycle();
    effect.attach_mount("bg");
    assert_eq!(effect.mark_dependencies_ready(), EffectPhase::Active);
    assert!(effect.is_active());
    assert_eq!(calls.borrow().constructed, ["bg"]);
}

#[test]
fn activates_when_ready_then_mount() {
    let (mut effect, calls) = lifecycle();
    effect.mark_dependencies_ready();
    assert_eq!(effect.attach_mount("bg"), EffectPhase::Active);
    assert_eq!(calls.borrow().constructed.len(), 1);
}

#[test]
fn passes_configured_options() {
    let (mut effect, calls) = lifecycle();
    effect.attach_mount("bg");
    effect.mark_dependencies_ready();
    let options = calls.borrow().options.clone().unwrap();
    assert_eq!(options.base_color, 0x22b945);
    assert!(options.mouse_controls);
    assert!(!options.gyro_controls);
}

#[test]
fn repeated_readiness_constructs_once() {
    let (mut effect, calls) = lifecycle();
    effect.attach_mount("bg");
    for _ in 0..5 {
        effect.mark_dependencies_ready();
    }
    assert_eq!(calls.borrow().constructed.len(), 1);
    assert_eq!(effect.phase(), EffectPhase::Active);
}

#[test]
fn second_mount_is_ignored() {
    let (mut effect, calls) = lifecycle();
    effect.attach_mount("bg");
    effect.mark_dependencies_ready();
    effect.attach_mount("other");
    assert_eq!(calls.borrow().constructed, ["bg"]);
}

#[test]
fn teardown_destroys_exactly_once() {
    let (mut effect, calls) = lifecycle();
    effect.attach_mount("bg");
    effect.mark_dependencies_ready();

    assert_eq!(effect.teardown(), EffectPhase::Destroyed);
    assert_eq!(effect.teardown(), EffectPhase::Destroyed);
    drop(effect);

    assert_eq!(calls.borrow().destroyed, [1]);
}

#[test]
fn drop_destroys_active_handle() {
    let (mut effect, calls) = lifecycle();
    effect.attach_mount("bg");
    effect.mark_dependencies_ready();
    drop(effect);
    assert_eq!(calls.borrow().destroyed, [1]);
}

#[test]
fn teardown_before_activation_destroys_nothing() {
    let (mut effect, calls) = lifecycle();
    effect.attach_mount("bg");
    effect.teardown();
    drop(effect);
    assert!(calls.borrow().destroyed.is_empty());
}

#[test]
fn no_reactivation_after_teardown() {
    let (mut effect, calls) = lifecycle();
    effect.attach_mount("bg");
    effect.mark_dependencies_ready();
    effect.teardown();

    assert_eq!(effect.mark_dependencies_ready(), EffectPhase::Destroyed);
    assert_eq!(effect.attach_mount("bg"), EffectPhase::Destroyed);
    assert_eq!(calls.borrow().constructed.len(), 1);
}

#[test]
fn missing_library_degrades_silently() {
    let (backend, calls) = RecordingBackend::unavailable();
    let mut effect = EffectLifecycle::new(backend, HaloConfig::default());
    effect.attach_mount("bg");

    assert_eq!(effect.mark_dependencies_ready(), EffectPhase::Unavailable);
    assert_eq!(effect.mark_dependencies_ready(), EffectPhase::Unavailable);
    assert!(!effect.is_active());

    assert_eq!(effect.teardown(), EffectPhase::Destroyed);
    assert!(calls.borrow().destroyed.is_empty());
}

#[test]
fn null_backend_lifecycle() {
    let mut effect = EffectLifecycle::new(NullBackend::new(), HaloConfig::default());
    effect.attach_mount(());
    assert_eq!(effect.mark_dependencies_ready(), EffectPhase::Active);
    assert_eq!(effect.teardown(), EffectPhase::Destroyed);
}
