use veil_primitives::{Color, Modifier};

use super::*;

fn deco(id: u64, pane: u64) -> Decoration {
	Decoration {
		id: DecorationId(id),
		pane: PaneId(pane),
		extent: Extent::whole(10),
		style: Style::new().add_modifier(Modifier::DIM),
	}
}

#[test]
fn put_replaces_existing_entry_for_same_pane() {
	let mut reg = DecorationRegistry::new();
	assert_eq!(reg.put(deco(1, 7)), None);

	let replaced = reg.put(Decoration {
		style: Style::new().bg(Color::BLACK),
		..deco(2, 7)
	});
	assert_eq!(replaced.map(|d| d.id), Some(DecorationId(1)));
	assert_eq!(reg.len(), 1);
	assert_eq!(reg.get(PaneId(7)).map(|d| d.id), Some(DecorationId(2)));
}

#[test]
fn remove_and_contains() {
	let mut reg = DecorationRegistry::new();
	reg.put(deco(1, 1));
	reg.put(deco(2, 2));

	assert!(reg.contains(PaneId(1)));
	assert_eq!(reg.remove(PaneId(1)).map(|d| d.id), Some(DecorationId(1)));
	assert!(!reg.contains(PaneId(1)));
	assert_eq!(reg.remove(PaneId(1)), None);
	assert_eq!(reg.panes(), vec![PaneId(2)]);
}

#[test]
fn take_stale_only_removes_failing_entries() {
	let mut reg = DecorationRegistry::new();
	for pane in 1..=4 {
		reg.put(deco(pane, pane));
	}

	let mut stale = reg.take_stale(|pane| pane.0 % 2 == 0);
	stale.sort_by_key(|d| d.pane);

	assert_eq!(
		stale.iter().map(|d| d.pane).collect::<Vec<_>>(),
		vec![PaneId(1), PaneId(3)]
	);
	assert_eq!(reg.panes(), vec![PaneId(2), PaneId(4)]);
}

#[test]
fn drain_empties_registry() {
	let mut reg = DecorationRegistry::new();
	reg.put(deco(1, 1));
	reg.put(deco(2, 2));

	let mut seen = Vec::new();
	reg.for_each(|pane, d| seen.push((pane, d.id)));
	seen.sort();
	assert_eq!(seen, vec![(PaneId(1), DecorationId(1)), (PaneId(2), DecorationId(2))]);

	let mut ids: Vec<_> = reg.iter().map(|d| d.id).collect();
	ids.sort();
	assert_eq!(ids, vec![DecorationId(1), DecorationId(2)]);

	assert_eq!(reg.drain().count(), 2);
	assert!(reg.is_empty());
}
