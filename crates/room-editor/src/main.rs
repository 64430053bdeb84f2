//! Headless demo driver for the room editor engine
//!
//! Runs a scripted editing session: place furniture, select, drag with
//! grid snapping, nudge, undo/redo, then save the scene slot. Useful
//! for exercising the engine without a rendering host attached.

use glam::Vec3;

use room_editor::{
    EditorSession, KeyCommand, NudgeDirection, PointerEvent, PointerHit, ToolMode,
};

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "room_editor=debug,room_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting room editor demo session");

    let mut session = EditorSession::restore();

    let bed = session.place_asset("bed_01");
    let lamp = session.place_asset("lamp_01");
    session.place_asset("rug_01");

    // drag the bed against the back wall, snapped to the default grid
    session.handle_pointer(PointerEvent::Clicked(PointerHit::on_object(bed)));
    session.handle_key(KeyCommand::SetTool(ToolMode::Move));
    session.handle_pointer(PointerEvent::Pressed(PointerHit::on_object(bed)));
    session.handle_pointer(PointerEvent::Moved(PointerHit::at_point(Vec3::new(
        -4.2, 0.0, -3.8,
    ))));
    session.handle_pointer(PointerEvent::Released(PointerHit::default()));

    // nudge the lamp next to it
    session.handle_pointer(PointerEvent::Clicked(PointerHit::on_object(lamp)));
    for _ in 0..5 {
        session.handle_key(KeyCommand::Nudge(NudgeDirection::Left));
    }

    session.handle_key(KeyCommand::Undo);
    session.handle_key(KeyCommand::Redo);

    for object in session.store.objects() {
        tracing::info!(
            id = %object.id,
            asset = %object.asset_id,
            position = ?object.transform.position,
            "placed"
        );
    }

    match session.save() {
        Ok(()) => tracing::info!("scene saved"),
        Err(e) => tracing::error!("failed to save scene: {e}"),
    }
}
