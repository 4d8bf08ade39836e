//! End-to-end scenarios: config on disk to decorations on a host.

use pretty_assertions::assert_eq;
use veil_config::{Config, load_user_config_from_dir};
use veil_core::test_support::MockHost;
use veil_core::{Color, Modifier, PaneId, Style, Veil};

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn three_panes() -> (MockHost, [PaneId; 3]) {
	let mut host = MockHost::new();
	let panes = [host.add_pane(1), host.add_pane(2), host.add_pane(3)];
	(host, panes)
}

#[test]
fn activate_then_deactivate() {
	init_tracing();
	let (mut host, [a, b, c]) = three_panes();
	let config = Config::parse("[style]\nkind = \"fixed\"\nmodifiers = [\"dim\"]\n").unwrap();
	let mut veil = Veil::new(config.to_options().unwrap());

	veil.on_redraw(&mut host, Some(a));
	assert_eq!(host.decoration_count(), 0);

	let stats = veil.enable(&mut host);
	assert_eq!(stats.created, 2);
	assert_eq!(veil.registry().panes(), vec![b, c]);
	assert_eq!(host.decorated_panes(), vec![b, c]);

	assert_eq!(veil.disable(&mut host), 2);
	assert!(veil.registry().is_empty());
	assert_eq!(host.decoration_count(), 0);
	assert_eq!(host.deleted_count(), 2);
}

#[test]
fn fixed_style_follows_focus() {
	init_tracing();
	let (mut host, [x, y, _]) = three_panes();
	let config = Config::parse("[style]\nkind = \"fixed\"\nbackground = \"#303030\"\n").unwrap();
	let v = Style::new().bg(Color::Rgb(0x30, 0x30, 0x30));
	let mut veil = Veil::new(config.to_options().unwrap());
	veil.on_redraw(&mut host, Some(x));
	veil.enable(&mut host);
	assert!(host.decoration(x).is_none());
	assert_eq!(host.style_of(y), Some(v));

	let change = veil.on_redraw(&mut host, Some(y)).expect("focus moved");
	assert_eq!(change.previous, Some(x));
	assert_eq!(change.current, y);

	assert_eq!(host.style_of(x), Some(v));
	assert!(host.decoration(y).is_none());
}

#[test]
fn overlay_mode_decorates_only_focus() {
	let (mut host, [a, b, _]) = three_panes();
	let config = Config::parse("overlay_active_pane = true\n[style]\nkind = \"fixed\"\nmodifiers = [\"bold\"]\n").unwrap();
	let mut veil = Veil::new(config.to_options().unwrap());
	veil.on_redraw(&mut host, Some(a));
	veil.enable(&mut host);
	assert_eq!(host.decorated_panes(), vec![a]);
	assert_eq!(host.style_of(a), Some(Style::new().add_modifier(Modifier::BOLD)));

	veil.on_redraw(&mut host, Some(b));
	assert_eq!(host.decorated_panes(), vec![b]);

	veil.set_overlay_active_pane(false, &mut host);
	assert_eq!(host.decorated_panes(), vec![a, PaneId(3)]);
}

#[test]
fn shade_style_tracks_each_pane_background() {
	let (mut host, [a, b, c]) = three_panes();
	host.set_background(b, Some(Color::Rgb(100, 100, 100)));
	host.set_background(c, Some(Color::Rgb(200, 200, 200)));
	let config = Config::parse("[style]\nkind = \"shade\"\namount = -0.5\n").unwrap();
	let mut veil = Veil::new(config.to_options().unwrap());
	veil.on_redraw(&mut host, Some(a));
	veil.enable(&mut host);

	assert_eq!(host.style_of(b), Some(Style::new().bg(Color::Rgb(50, 50, 50))));
	assert_eq!(host.style_of(c), Some(Style::new().bg(Color::Rgb(100, 100, 100))));

	// `a` has no background and no fallback, so it stays bare once unfocused.
	veil.on_redraw(&mut host, Some(b));
	assert!(host.decoration(a).is_none());
	assert_eq!(host.decorated_panes(), vec![c]);
}

#[test]
fn loaded_config_drives_the_mode() {
	init_tracing();
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("veil.toml"), "[style]\nkind = \"fixed\"\nmodifiers = [\"dim\"]\n").unwrap();
	std::fs::write(dir.path().join("veil.local.toml"), "enabled = false\n").unwrap();

	let report = load_user_config_from_dir(dir.path());
	assert!(report.errors.is_empty());
	let config = report.config.expect("config should load");

	let (mut host, [a, ..]) = three_panes();
	let mut veil = Veil::new(config.to_options().unwrap());
	veil.on_redraw(&mut host, Some(a));
	if config.enabled() {
		veil.enable(&mut host);
	}
	assert!(!veil.is_enabled());
	assert_eq!(host.decoration_count(), 0);

	assert!(veil.toggle(&mut host));
	assert_eq!(host.decoration_count(), 2);
}
