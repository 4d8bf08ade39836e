use proptest::prelude::*;
use veil_primitives::{Modifier, PaneId, Style};

use crate::host::PaneHost;
use crate::style_source::StyleSource;
use crate::test_support::MockHost;
use crate::veil::{Veil, VeilOptions};

fn dim_veil(overlay_active_pane: bool) -> Veil {
	Veil::new(VeilOptions {
		overlay_active_pane,
		style: StyleSource::Fixed(Style::new().add_modifier(Modifier::DIM)),
	})
}

/// Must never record a transient prompt pane as focused.
///
/// - Enforced in: `FocusTracker::on_redraw`
/// - Failure symptom: Opening a prompt un-decorates the pane the user is
///   actually working in.
#[cfg_attr(test, test)]
pub(crate) fn test_prompt_never_focused() {
	let mut host = MockHost::new();
	let a = host.add_pane(1);
	let b = host.add_pane(2);
	let prompt = host.add_transient(3);
	let mut veil = dim_veil(false);
	veil.enable(&mut host);

	veil.on_redraw(&mut host, Some(a));
	veil.on_redraw(&mut host, Some(prompt));

	assert_eq!(veil.active_pane(), Some(a));
	assert_eq!(host.decorated_panes(), vec![b]);
}

/// Must hold at most one decoration per pane.
///
/// - Enforced in: `Veil::apply`
/// - Failure symptom: Stacked decorations compound the style and leak on
///   teardown.
#[cfg_attr(test, test)]
pub(crate) fn test_single_decoration_per_pane() {
	let mut host = MockHost::new();
	let a = host.add_pane(1);
	let b = host.add_pane(2);
	let mut veil = dim_veil(false);
	veil.enable(&mut host);

	for pane in [a, b, a, b, a] {
		veil.on_redraw(&mut host, Some(pane));
		veil.reconcile_all(&mut host);
		veil.reset_all(&mut host);
	}

	assert_eq!(host.decoration_count(), veil.registry().len());
	for pane in [a, b] {
		// MockHost::decoration panics on duplicates.
		let _ = host.decoration(pane);
	}
}

/// Must purge registry entries for panes the host destroyed.
///
/// - Enforced in: `Veil::reconcile_all`
/// - Failure symptom: Registry grows without bound as panes come and go.
#[cfg_attr(test, test)]
pub(crate) fn test_dead_panes_purged() {
	let mut host = MockHost::new();
	let a = host.add_pane(1);
	let b = host.add_pane(2);
	let mut veil = dim_veil(false);
	veil.on_redraw(&mut host, Some(a));
	veil.enable(&mut host);
	assert!(veil.registry().contains(b));

	host.kill(b);
	veil.reconcile_all(&mut host);

	assert!(veil.registry().is_empty());
	assert_eq!(host.decoration_count(), 0);
}

/// Must leave no decorations behind after the mode is turned off.
///
/// - Enforced in: `Veil::disable`
/// - Failure symptom: Panes stay dimmed after the user disables the mode.
#[cfg_attr(test, test)]
pub(crate) fn test_disable_destroys_all() {
	let mut host = MockHost::new();
	for id in 1..=4 {
		host.add_pane(id);
	}
	let mut veil = dim_veil(false);
	veil.on_redraw(&mut host, Some(PaneId(1)));
	veil.enable(&mut host);
	assert_eq!(host.decoration_count(), 3);

	assert_eq!(veil.disable(&mut host), 3);
	assert!(veil.registry().is_empty());
	assert_eq!(host.decoration_count(), 0);

	// Focus changes while disabled must not resurrect decorations.
	veil.on_redraw(&mut host, Some(PaneId(2)));
	assert_eq!(host.decoration_count(), 0);
}

#[derive(Debug, Clone)]
enum Step {
	Focus(u64),
	Kill(u64),
	Spawn(u64),
	Reconcile,
	Reset,
	Flip,
}

fn arb_step() -> impl Strategy<Value = Step> {
	prop_oneof![
		4 => (0u64..6).prop_map(Step::Focus),
		1 => (0u64..6).prop_map(Step::Kill),
		1 => (0u64..6).prop_map(Step::Spawn),
		1 => Just(Step::Reconcile),
		1 => Just(Step::Reset),
		1 => Just(Step::Flip),
	]
}

proptest! {
	/// Registry and host agree after every step, and decorated panes follow the mode.
	#[test]
	fn prop_registry_mirrors_host(steps in prop::collection::vec(arb_step(), 1..48)) {
		let mut host = MockHost::new();
		for id in 0..3 {
			host.add_pane(id);
		}
		let mut veil = dim_veil(false);
		veil.enable(&mut host);

		for step in steps {
			match step {
				Step::Focus(id) => { veil.on_redraw(&mut host, Some(PaneId(id))); }
				Step::Kill(id) => host.kill(PaneId(id)),
				Step::Spawn(id) => { host.add_pane(id); }
				Step::Reconcile => { veil.reconcile_all(&mut host); }
				Step::Reset => { veil.reset_all(&mut host); }
				Step::Flip => {
					let flag = !veil.options().overlay_active_pane;
					veil.set_overlay_active_pane(flag, &mut host);
				}
			}

			prop_assert_eq!(host.decoration_count(), veil.registry().len());

			if matches!(step, Step::Reconcile | Step::Reset | Step::Flip) {
				let active = veil.active_pane();
				let overlay_active_pane = veil.options().overlay_active_pane;
				for pane in host.visible_panes() {
					let expect = (active == Some(pane)) == overlay_active_pane;
					prop_assert_eq!(host.decoration(pane).is_some(), expect, "pane {}", pane);
				}
			}
		}
	}
}
