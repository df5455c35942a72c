//! Player domain: ECS systems driving the controller, hitbox, fall-death and camera.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actor::{ActorBody, AvianBody, Facing, GameLayer, SoundSink, SpatialGroundProbe, TickClock};
use crate::animation::{AnimatorParameters, PlayerAnimator};
use crate::audio::{SoundCue, SoundQueue};
use crate::enemy::DamageEvent;
use crate::game::GameOverRequested;
use crate::input::GameInput;
use crate::player::{
    AttackHitbox, CameraTuning, GameOverCountdown, Player, PlayerController, PlayerEvent,
    PlayerTuning,
};

pub(crate) fn expire_player_timers(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&mut PlayerController, &mut AttackHitbox), With<Player>>,
) {
    let now = time.elapsed_secs();

    for (mut controller, mut hitbox) in &mut query {
        for event in controller.expire_timers(&tuning, now) {
            match event {
                PlayerEvent::AttackEnded => hitbox.deactivate(),
                PlayerEvent::DashEnded => debug!("Player dash ended"),
                _ => {}
            }
        }
    }
}

#[allow(clippy::type_complexity)]
pub(crate) fn drive_player(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<GameInput>,
    tuning: Res<PlayerTuning>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut LinearVelocity,
            &mut PlayerController,
            &mut PlayerAnimator,
            &mut AnimatorParameters,
            &mut SoundQueue,
            &mut AttackHitbox,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    let clock = TickClock::from_time(&time);
    let ground = SpatialGroundProbe::new(&spatial_query, GameLayer::Ground);

    for (
        entity,
        transform,
        mut velocity,
        mut controller,
        mut animator,
        mut params,
        mut sounds,
        mut hitbox,
        mut sprite,
    ) in &mut query
    {
        let mut body = AvianBody::new(entity, transform, &mut velocity, &mut commands);
        let Some(tick) = controller.fixed_tick(&input, &mut body, &ground, &tuning, clock) else {
            continue;
        };

        // Triggers go in before the continuous update so a landing in the
        // same tick still clears a fresh jump latch correctly.
        for event in &tick.events {
            match event {
                PlayerEvent::Jumped => {
                    animator.trigger_jump(&mut *params);
                    sounds.play_one_shot(SoundCue::Jump);
                }
                PlayerEvent::Dashed => {
                    animator.trigger_dash(&mut *params);
                    sounds.play_one_shot(SoundCue::Dash);
                }
                PlayerEvent::AttackStarted => {
                    animator.trigger_attack(&mut *params);
                    hitbox.activate();
                    sounds.play_one_shot(SoundCue::Attack);
                }
                PlayerEvent::DashEnded | PlayerEvent::AttackEnded => {}
            }
        }

        animator.update_state(&mut *params, &tick.animation);
        sprite.flip_x = controller.facing == Facing::Left;
    }
}

/// Centre of the attack region for a body at `position`.
pub fn hitbox_center(position: Vec2, facing: Facing, offset: f32) -> Vec2 {
    position + Vec2::new(facing.sign() * offset, 0.0)
}

pub(crate) fn apply_hitbox_damage(
    tuning: Res<PlayerTuning>,
    spatial_query: SpatialQuery,
    mut damage: MessageWriter<DamageEvent>,
    mut query: Query<(&Transform, &PlayerController, &mut AttackHitbox), With<Player>>,
) {
    let shape = Collider::rectangle(tuning.hitbox_size.0, tuning.hitbox_size.1);
    let filter = SpatialQueryFilter::from_mask(GameLayer::Enemy);

    for (transform, controller, mut hitbox) in &mut query {
        if !hitbox.active {
            continue;
        }

        let center = hitbox_center(
            transform.translation.truncate(),
            controller.facing,
            tuning.hitbox_offset,
        );
        for target in spatial_query.shape_intersections(&shape, center, 0.0, &filter) {
            if hitbox.strike(target) {
                damage.write(DamageEvent {
                    target,
                    amount: tuning.attack_damage,
                });
            }
        }
    }
}

#[allow(clippy::type_complexity)]
pub(crate) fn detect_fall_death(
    mut commands: Commands,
    tuning: Res<PlayerTuning>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut LinearVelocity,
            &mut PlayerController,
            &mut PlayerAnimator,
            &mut AnimatorParameters,
        ),
        With<Player>,
    >,
) {
    for (entity, transform, mut velocity, mut controller, mut animator, mut params) in &mut query {
        if !controller.check_fall(transform.translation.y, &tuning) {
            continue;
        }

        info!(
            "Player fell out of the level at y={:.1}",
            transform.translation.y
        );
        AvianBody::new(entity, transform, &mut velocity, &mut commands).set_simulated(false);
        animator.trigger_fall_death(&mut *params);
        commands
            .entity(entity)
            .insert(GameOverCountdown::new(tuning.game_over_delay));
    }
}

pub(crate) fn tick_game_over_countdown(
    mut commands: Commands,
    time: Res<Time>,
    mut requests: MessageWriter<GameOverRequested>,
    mut query: Query<(Entity, &mut GameOverCountdown, &mut SoundQueue)>,
) {
    for (entity, mut countdown, mut sounds) in &mut query {
        if !countdown.0.tick(time.delta()).just_finished() {
            continue;
        }
        sounds.play_one_shot(SoundCue::GameOver);
        requests.write(GameOverRequested);
        commands.entity(entity).remove::<GameOverCountdown>();
    }
}

/// One smoothing step toward `target`; `t` is clamped to `[0, 1]`.
pub fn follow_step(current: Vec2, target: Vec2, t: f32) -> Vec2 {
    current.lerp(target, t.clamp(0.0, 1.0))
}

pub(crate) fn follow_camera(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    player: Query<(&Transform, &PlayerController), (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok((target, controller)) = player.single() else {
        return;
    };
    // Camera holds still while the player drops out of the level.
    if controller.falling_to_death {
        return;
    }
    let Ok(mut camera_transform) = camera.single_mut() else {
        return;
    };

    let next = follow_step(
        camera_transform.translation.truncate(),
        target.translation.truncate(),
        time.delta_secs() * tuning.follow_sharpness,
    );
    camera_transform.translation.x = next.x;
    camera_transform.translation.y = next.y;
}
