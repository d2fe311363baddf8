//! # アプリケーション構築
//!
//! リポジトリ → State → Router の順に組み立てる。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, post, put},
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use zoo_infra::{
   db::{DatabaseProbe, PgDatabaseProbe},
   repository::{
      AnimalRepository,
      AssignmentRepository,
      EnclosureRepository,
      PostgresAnimalRepository,
      PostgresAssignmentRepository,
      PostgresEnclosureRepository,
      PostgresSpeciesRepository,
      PostgresZooRepository,
      PostgresZookeeperRepository,
      SpeciesRepository,
      ZooRepository,
      ZookeeperRepository,
   },
};

use crate::handler::{
   AnimalState,
   AssignmentState,
   EnclosureState,
   ReadinessState,
   ResetState,
   SpeciesState,
   ZookeeperState,
   create_animal,
   create_assignment,
   create_enclosure,
   create_species,
   create_zookeeper,
   delete_animal,
   delete_assignment,
   delete_enclosure,
   delete_species,
   delete_zookeeper,
   health_check,
   list_animals,
   list_assignments,
   list_enclosures,
   list_species,
   list_zookeepers,
   readiness_check,
   reset_database,
   update_animal,
   update_assignment,
   update_enclosure,
   update_species,
   update_zookeeper,
};

/// ルーターが依存するリポジトリ一式
///
/// テストではインメモリ実装を詰めて渡す。
#[derive(Clone)]
pub struct Repositories {
   pub animals:     Arc<dyn AnimalRepository>,
   pub species:     Arc<dyn SpeciesRepository>,
   pub enclosures:  Arc<dyn EnclosureRepository>,
   pub zookeepers:  Arc<dyn ZookeeperRepository>,
   pub assignments: Arc<dyn AssignmentRepository>,
   pub zoo:         Arc<dyn ZooRepository>,
   pub probe:       Arc<dyn DatabaseProbe>,
}

impl Repositories {
   /// 接続プールを共有する PostgreSQL 実装で組み立てる
   pub fn postgres(pool: PgPool) -> Self {
      Self {
         animals:     Arc::new(PostgresAnimalRepository::new(pool.clone())),
         species:     Arc::new(PostgresSpeciesRepository::new(pool.clone())),
         enclosures:  Arc::new(PostgresEnclosureRepository::new(pool.clone())),
         zookeepers:  Arc::new(PostgresZookeeperRepository::new(pool.clone())),
         assignments: Arc::new(PostgresAssignmentRepository::new(pool.clone())),
         zoo:         Arc::new(PostgresZooRepository::new(pool.clone())),
         probe:       Arc::new(PgDatabaseProbe::new(pool)),
      }
   }
}

/// ルーターを構築する
///
/// リソース API は `/api` 配下、ヘルスチェックはルート直下に置く。
pub fn build_router(repositories: Repositories) -> Router {
   let animal_state = Arc::new(AnimalState {
      repository: repositories.animals,
   });
   let species_state = Arc::new(SpeciesState {
      repository: repositories.species,
   });
   let enclosure_state = Arc::new(EnclosureState {
      repository: repositories.enclosures,
   });
   let zookeeper_state = Arc::new(ZookeeperState {
      repository: repositories.zookeepers,
   });
   let assignment_state = Arc::new(AssignmentState {
      repository: repositories.assignments,
   });
   let reset_state = Arc::new(ResetState {
      repository: repositories.zoo,
   });
   let readiness_state = Arc::new(ReadinessState {
      probe: repositories.probe,
   });

   let api = Router::new()
      .route("/Animals", get(list_animals).post(create_animal))
      .route("/Animals/{id}", put(update_animal).delete(delete_animal))
      .with_state(animal_state)
      .merge(
         Router::new()
            .route("/Species", get(list_species).post(create_species))
            .route("/Species/{id}", put(update_species).delete(delete_species))
            .with_state(species_state),
      )
      .merge(
         Router::new()
            .route("/Enclosures", get(list_enclosures).post(create_enclosure))
            .route(
               "/Enclosures/{id}",
               put(update_enclosure).delete(delete_enclosure),
            )
            .with_state(enclosure_state),
      )
      .merge(
         Router::new()
            .route("/Zookeepers", get(list_zookeepers).post(create_zookeeper))
            .route(
               "/Zookeepers/{id}",
               put(update_zookeeper).delete(delete_zookeeper),
            )
            .with_state(zookeeper_state),
      )
      .merge(
         Router::new()
            .route(
               "/Assignments",
               get(list_assignments).post(create_assignment),
            )
            .route(
               "/Assignments/{keeper_id}/{enclosure_id}",
               put(update_assignment).delete(delete_assignment),
            )
            .with_state(assignment_state),
      )
      .merge(
         Router::new()
            .route("/reset", post(reset_database))
            .with_state(reset_state),
      );

   Router::new()
      .route("/health", get(health_check))
      .merge(
         Router::new()
            .route("/health/ready", get(readiness_check))
            .with_state(readiness_state),
      )
      .nest("/api", api)
      .layer(TraceLayer::new_for_http())
      .layer(CorsLayer::permissive())
}
