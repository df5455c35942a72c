//! Enemy domain: ECS systems for AI, damage and removal.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actor::{AvianBody, Facing, GameLayer, SpatialGroundProbe};
use crate::animation::{AnimatorParameters, EnemyAnimator};
use crate::enemy::{DamageEvent, DamageOutcome, DespawnCountdown, Enemy, EnemyBrain, EnemyTuning};
use crate::player::Player;

#[allow(clippy::type_complexity)]
pub(crate) fn drive_enemies(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    spatial_query: SpatialQuery,
    player_query: Query<&Transform, With<Player>>,
    mut enemy_query: Query<
        (
            Entity,
            &Transform,
            &mut LinearVelocity,
            &mut EnemyBrain,
            &EnemyAnimator,
            &mut AnimatorParameters,
            &mut Sprite,
        ),
        With<Enemy>,
    >,
) {
    let now = time.elapsed_secs();
    let target = player_query
        .iter()
        .next()
        .map(|transform| transform.translation.truncate());
    let ground = SpatialGroundProbe::new(&spatial_query, GameLayer::Ground);

    for (entity, transform, mut velocity, mut brain, animator, mut params, mut sprite) in
        &mut enemy_query
    {
        let mut body = AvianBody::new(entity, transform, &mut velocity, &mut commands);
        let Some(frame) = brain.fixed_tick(&mut body, &ground, target, &tuning, now) else {
            continue;
        };

        animator.update_state(&mut *params, &frame);
        sprite.flip_x = brain.direction == Facing::Left;
    }
}

#[allow(clippy::type_complexity)]
pub(crate) fn apply_damage_events(
    mut commands: Commands,
    tuning: Res<EnemyTuning>,
    mut damage_events: MessageReader<DamageEvent>,
    mut enemy_query: Query<
        (
            &Transform,
            &mut LinearVelocity,
            &mut EnemyBrain,
            &EnemyAnimator,
            &mut AnimatorParameters,
        ),
        With<Enemy>,
    >,
) {
    for event in damage_events.read() {
        let Ok((transform, mut velocity, mut brain, animator, mut params)) =
            enemy_query.get_mut(event.target)
        else {
            debug!("Damage for missing enemy {:?}", event.target);
            continue;
        };

        let outcome = {
            let mut body = AvianBody::new(event.target, transform, &mut velocity, &mut commands);
            brain.take_damage(event.amount, &mut body, &tuning)
        };

        match outcome {
            DamageOutcome::Killed => {
                info!("Enemy {:?} killed", event.target);
                animator.trigger_death(&mut *params);
                animator.update_state(&mut *params, &brain.animation_frame(Vec2::ZERO));
                commands
                    .entity(event.target)
                    .insert(DespawnCountdown::new(tuning.destroy_delay));
            }
            DamageOutcome::Hurt => {
                debug!("Enemy {:?} hit, health={}", event.target, brain.health);
                animator.trigger_get_hit(&mut *params);
            }
            DamageOutcome::Ignored => {}
        }
    }
}

pub(crate) fn tick_despawn_countdowns(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DespawnCountdown)>,
) {
    for (entity, mut countdown) in &mut query {
        if countdown.0.tick(time.delta()).just_finished() {
            debug!("Removing enemy {:?}", entity);
            commands.entity(entity).despawn();
        }
    }
}
