//! # テスト用インメモリ実装
//!
//! ハンドラテストで使用するインメモリの動物園ストア。
//! 全リポジトリトレイトと [`DatabaseProbe`] を 1 つの構造体で実装し、
//! 書き込みはストアドファンクションと同じ結果コードを組み立ててから
//! [`ProcedureOutcome::from_code`] でデコードする。
//!
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! zoo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use chrono::NaiveDate;
use zoo_domain::{
    ProcedureOutcome,
    ProcedureVerb,
    ResourceKind,
    animal::{AnimalDetail, AnimalFields, AnimalId},
    assignment::{AssignmentChange, AssignmentDetail, AssignmentKey},
    enclosure::{Enclosure, EnclosureFields, EnclosureId},
    procedure::{NOT_FOUND_CODE, VALIDATION_FAILED_CODE},
    species::{Species, SpeciesFields, SpeciesId},
    zookeeper::{KeeperId, Zookeeper, ZookeeperFields},
};

use crate::{
    db::DatabaseProbe,
    error::InfraError,
    repository::{
        AnimalRepository,
        AssignmentRepository,
        EnclosureRepository,
        SpeciesRepository,
        ZooRepository,
        ZookeeperRepository,
    },
};

/// 割り当て挿入の成功コード
const ASSIGNMENT_INSERTED_CODE: i32 = 1;

#[derive(Debug, Clone)]
struct AnimalRecord {
    animal_id:     AnimalId,
    name:          String,
    date_of_birth: NaiveDate,
    sex:           String,
    species_id:    SpeciesId,
    enclosure_id:  EnclosureId,
}

#[derive(Debug, Default)]
struct ZooState {
    species:        Vec<Species>,
    enclosures:     Vec<Enclosure>,
    zookeepers:     Vec<Zookeeper>,
    animals:        Vec<AnimalRecord>,
    assignments:    Vec<AssignmentKey>,
    next_species:   i32,
    next_enclosure: i32,
    next_keeper:    i32,
    next_animal:    i32,
}

/// インメモリの動物園ストア
///
/// クローンは同じ状態を共有する。
#[derive(Debug, Clone)]
pub struct InMemoryZoo {
    state:       Arc<Mutex<ZooState>>,
    unavailable: Arc<AtomicBool>,
}

impl Default for InMemoryZoo {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryZoo {
    /// 初期データ投入済みのストアを作成する
    pub fn new() -> Self {
        Self {
            state:       Arc::new(Mutex::new(ZooState::seeded())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 空のストアを作成する
    pub fn empty() -> Self {
        Self {
            state:       Arc::new(Mutex::new(ZooState::empty())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// データベース障害を模擬する
    ///
    /// `true` の間、全操作が [`InfraError`] を返し、ping も失敗する。
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), InfraError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(InfraError::unexpected("データベースに接続できません"));
        }
        Ok(())
    }

    fn decode(
        kind: ResourceKind,
        verb: ProcedureVerb,
        code: i32,
    ) -> Result<ProcedureOutcome, InfraError> {
        Ok(ProcedureOutcome::from_code(&kind.procedure(verb), code)?)
    }
}

// ===== 初期データ =====

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

impl ZooState {
    fn empty() -> Self {
        Self {
            next_species: 1,
            next_enclosure: 1,
            next_keeper: 1,
            next_animal: 1,
            ..Self::default()
        }
    }

    /// マイグレーションの `sp_reset_zoo_database` と同じ初期データ
    fn seeded() -> Self {
        let mut state = Self::empty();

        for (name, scientific_name, diet, vert_type) in [
            ("African Elephant", "Loxodonta africana", "Herbivore", "Mammal"),
            ("Bengal Tiger", "Panthera tigris tigris", "Carnivore", "Mammal"),
            ("Emperor Penguin", "Aptenodytes forsteri", "Carnivore", "Bird"),
            ("Green Sea Turtle", "Chelonia mydas", "Herbivore", "Reptile"),
        ] {
            state.insert_species(SpeciesFields {
                name:            name.to_string(),
                scientific_name: scientific_name.to_string(),
                diet:            diet.to_string(),
                vert_type:       vert_type.to_string(),
            });
        }

        for (enclosure_type, location, maximum_capacity) in [
            ("Savanna", "North Zone", 6),
            ("Jungle", "East Zone", 4),
            ("Polar", "South Zone", 20),
            ("Aquatic", "West Zone", 10),
        ] {
            state.insert_enclosure(EnclosureFields {
                enclosure_type: enclosure_type.to_string(),
                location: location.to_string(),
                maximum_capacity,
            });
        }

        for (first_name, last_name, hire_date, speciality) in [
            ("Maya", "Lopez", date(2019, 6, 1), "Large Mammals"),
            ("Daniel", "Okafor", date(2020, 2, 15), "Big Cats"),
            ("Priya", "Shah", date(2021, 9, 30), "Birds and Reptiles"),
        ] {
            state.insert_zookeeper(ZookeeperFields {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                hire_date,
                speciality: speciality.to_string(),
            });
        }

        for (name, date_of_birth, sex, species_id, enclosure_id) in [
            ("Tembo", date(2012, 5, 14), "M", 1, 1),
            ("Raja", date(2016, 8, 2), "M", 2, 2),
            ("Pip", date(2020, 11, 23), "F", 3, 3),
            ("Shelly", date(2005, 7, 19), "F", 4, 4),
            ("Nala", date(2014, 3, 30), "F", 1, 1),
        ] {
            state.insert_animal(AnimalFields {
                name: name.to_string(),
                date_of_birth,
                sex: sex.to_string(),
                species_id: SpeciesId::new(species_id),
                enclosure_id: EnclosureId::new(enclosure_id),
            });
        }

        for (keeper_id, enclosure_id) in [(1, 1), (2, 2), (3, 3), (3, 4)] {
            state.insert_assignment(AssignmentKey::new(
                KeeperId::new(keeper_id),
                EnclosureId::new(enclosure_id),
            ));
        }

        state
    }

    // ===== 制約の模擬 =====

    fn species_exists(&self, id: SpeciesId) -> bool {
        self.species.iter().any(|s| s.species_id == id)
    }

    fn enclosure_exists(&self, id: EnclosureId) -> bool {
        self.enclosures.iter().any(|e| e.enclosure_id == id)
    }

    fn keeper_exists(&self, id: KeeperId) -> bool {
        self.zookeepers.iter().any(|z| z.keeper_id == id)
    }

    fn species_valid(&self, fields: &SpeciesFields, except: Option<SpeciesId>) -> bool {
        let duplicate = self
            .species
            .iter()
            .any(|s| s.name == fields.name && Some(s.species_id) != except);
        !duplicate
            && fits(&fields.name, 100)
            && fits(&fields.scientific_name, 150)
            && fits(&fields.diet, 50)
            && fits(&fields.vert_type, 50)
    }

    fn enclosure_valid(fields: &EnclosureFields) -> bool {
        fields.maximum_capacity > 0
            && fits(&fields.enclosure_type, 50)
            && fits(&fields.location, 100)
    }

    fn zookeeper_valid(fields: &ZookeeperFields) -> bool {
        fits(&fields.first_name, 50) && fits(&fields.last_name, 50) && fits(&fields.speciality, 100)
    }

    fn animal_valid(&self, fields: &AnimalFields) -> bool {
        matches!(fields.sex.as_str(), "M" | "F")
            && fits(&fields.name, 100)
            && self.species_exists(fields.species_id)
            && self.enclosure_exists(fields.enclosure_id)
    }

    fn assignment_valid(&self, key: AssignmentKey) -> bool {
        self.keeper_exists(key.keeper_id) && self.enclosure_exists(key.enclosure_id)
    }

    // ===== 書き込み（結果コードを返す） =====

    fn insert_species(&mut self, fields: SpeciesFields) -> i32 {
        if !self.species_valid(&fields, None) {
            return VALIDATION_FAILED_CODE;
        }
        let id = SpeciesId::new(self.next_species);
        self.next_species += 1;
        self.species.push(Species::from_fields(id, fields));
        id.as_i32()
    }

    fn update_species(&mut self, id: SpeciesId, fields: SpeciesFields) -> i32 {
        let Some(index) = self.species.iter().position(|s| s.species_id == id) else {
            return NOT_FOUND_CODE;
        };
        if !self.species_valid(&fields, Some(id)) {
            return VALIDATION_FAILED_CODE;
        }
        self.species[index] = Species::from_fields(id, fields);
        1
    }

    fn delete_species(&mut self, id: SpeciesId) -> i32 {
        if self.animals.iter().any(|a| a.species_id == id) {
            return VALIDATION_FAILED_CODE;
        }
        remove_where(&mut self.species, |s| s.species_id == id)
    }

    fn insert_enclosure(&mut self, fields: EnclosureFields) -> i32 {
        if !Self::enclosure_valid(&fields) {
            return VALIDATION_FAILED_CODE;
        }
        let id = EnclosureId::new(self.next_enclosure);
        self.next_enclosure += 1;
        self.enclosures.push(Enclosure::from_fields(id, fields));
        id.as_i32()
    }

    fn update_enclosure(&mut self, id: EnclosureId, fields: EnclosureFields) -> i32 {
        let Some(index) = self.enclosures.iter().position(|e| e.enclosure_id == id) else {
            return NOT_FOUND_CODE;
        };
        if !Self::enclosure_valid(&fields) {
            return VALIDATION_FAILED_CODE;
        }
        self.enclosures[index] = Enclosure::from_fields(id, fields);
        1
    }

    fn delete_enclosure(&mut self, id: EnclosureId) -> i32 {
        if self.animals.iter().any(|a| a.enclosure_id == id) {
            return VALIDATION_FAILED_CODE;
        }
        let removed = remove_where(&mut self.enclosures, |e| e.enclosure_id == id);
        self.assignments.retain(|a| a.enclosure_id != id);
        removed
    }

    fn insert_zookeeper(&mut self, fields: ZookeeperFields) -> i32 {
        if !Self::zookeeper_valid(&fields) {
            return VALIDATION_FAILED_CODE;
        }
        let id = KeeperId::new(self.next_keeper);
        self.next_keeper += 1;
        self.zookeepers.push(Zookeeper::from_fields(id, fields));
        id.as_i32()
    }

    fn update_zookeeper(&mut self, id: KeeperId, fields: ZookeeperFields) -> i32 {
        let Some(index) = self.zookeepers.iter().position(|z| z.keeper_id == id) else {
            return NOT_FOUND_CODE;
        };
        if !Self::zookeeper_valid(&fields) {
            return VALIDATION_FAILED_CODE;
        }
        self.zookeepers[index] = Zookeeper::from_fields(id, fields);
        1
    }

    fn delete_zookeeper(&mut self, id: KeeperId) -> i32 {
        let removed = remove_where(&mut self.zookeepers, |z| z.keeper_id == id);
        self.assignments.retain(|a| a.keeper_id != id);
        removed
    }

    fn insert_animal(&mut self, fields: AnimalFields) -> i32 {
        if !self.animal_valid(&fields) {
            return VALIDATION_FAILED_CODE;
        }
        let id = AnimalId::new(self.next_animal);
        self.next_animal += 1;
        self.animals.push(AnimalRecord::from_fields(id, fields));
        id.as_i32()
    }

    fn update_animal(&mut self, id: AnimalId, fields: AnimalFields) -> i32 {
        let Some(index) = self.animals.iter().position(|a| a.animal_id == id) else {
            return NOT_FOUND_CODE;
        };
        if !self.animal_valid(&fields) {
            return VALIDATION_FAILED_CODE;
        }
        self.animals[index] = AnimalRecord::from_fields(id, fields);
        1
    }

    fn delete_animal(&mut self, id: AnimalId) -> i32 {
        remove_where(&mut self.animals, |a| a.animal_id == id)
    }

    fn insert_assignment(&mut self, key: AssignmentKey) -> i32 {
        if !self.assignment_valid(key) || self.assignments.contains(&key) {
            return VALIDATION_FAILED_CODE;
        }
        self.assignments.push(key);
        ASSIGNMENT_INSERTED_CODE
    }

    fn update_assignment(&mut self, current: AssignmentKey, change: AssignmentChange) -> i32 {
        let Some(index) = self.assignments.iter().position(|a| *a == current) else {
            return NOT_FOUND_CODE;
        };
        let target = change.target();
        if !self.assignment_valid(target) || (target != current && self.assignments.contains(&target))
        {
            return VALIDATION_FAILED_CODE;
        }
        self.assignments[index] = target;
        1
    }

    fn delete_assignment(&mut self, key: AssignmentKey) -> i32 {
        remove_where(&mut self.assignments, |a| *a == key)
    }

    // ===== 読み取り =====

    fn animal_details(&self) -> Vec<AnimalDetail> {
        let mut details: Vec<AnimalDetail> = self
            .animals
            .iter()
            .filter_map(|animal| {
                let species = self.species.iter().find(|s| s.species_id == animal.species_id)?;
                let enclosure = self
                    .enclosures
                    .iter()
                    .find(|e| e.enclosure_id == animal.enclosure_id)?;
                Some(AnimalDetail {
                    animal_id:       animal.animal_id,
                    name:            animal.name.clone(),
                    date_of_birth:   animal.date_of_birth,
                    sex:             animal.sex.clone(),
                    species_id:      animal.species_id,
                    enclosure_id:    animal.enclosure_id,
                    species_name:    species.name.clone(),
                    scientific_name: species.scientific_name.clone(),
                    diet:            species.diet.clone(),
                    vert_type:       species.vert_type.clone(),
                    enclosure_type:  enclosure.enclosure_type.clone(),
                    location:        enclosure.location.clone(),
                })
            })
            .collect();
        details.sort_by_cached_key(|a| collation_key(&a.name));
        details
    }

    fn assignment_details(&self) -> Vec<AssignmentDetail> {
        let mut details: Vec<AssignmentDetail> = self
            .assignments
            .iter()
            .filter_map(|key| {
                let keeper = self.zookeepers.iter().find(|z| z.keeper_id == key.keeper_id)?;
                let enclosure = self
                    .enclosures
                    .iter()
                    .find(|e| e.enclosure_id == key.enclosure_id)?;
                Some(AssignmentDetail {
                    keeper_id:      key.keeper_id,
                    enclosure_id:   key.enclosure_id,
                    keeper_name:    keeper.display_name(),
                    speciality:     keeper.speciality.clone(),
                    enclosure_type: enclosure.enclosure_type.clone(),
                    location:       enclosure.location.clone(),
                })
            })
            .collect();
        details.sort_by_cached_key(|a| (collation_key(&a.keeper_name), collation_key(&a.location)));
        details
    }
}

impl AnimalRecord {
    fn from_fields(animal_id: AnimalId, fields: AnimalFields) -> Self {
        Self {
            animal_id,
            name: fields.name,
            date_of_birth: fields.date_of_birth,
            sex: fields.sex,
            species_id: fields.species_id,
            enclosure_id: fields.enclosure_id,
        }
    }
}

/// 一覧の並び順キー
///
/// SQL 側の `ORDER BY lower(col) COLLATE "C", col COLLATE "C"` と同じ順序になる。
fn collation_key(value: &str) -> (String, String) {
    (value.to_lowercase(), value.to_string())
}

/// VARCHAR(n) に収まるか
fn fits(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// 条件に一致する要素を取り除き、影響行数を返す
fn remove_where<T>(items: &mut Vec<T>, predicate: impl Fn(&T) -> bool) -> i32 {
    let before = items.len();
    items.retain(|item| !predicate(item));
    i32::try_from(before - items.len()).unwrap_or(i32::MAX)
}

// ===== リポジトリトレイト実装 =====

#[async_trait]
impl SpeciesRepository for InMemoryZoo {
    async fn find_all(&self) -> Result<Vec<Species>, InfraError> {
        self.ensure_available()?;
        let mut species = self.state.lock().unwrap().species.clone();
        species.sort_by_cached_key(|s| collation_key(&s.name));
        Ok(species)
    }

    async fn insert(&self, fields: &SpeciesFields) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().insert_species(fields.clone());
        Self::decode(ResourceKind::Species, ProcedureVerb::Insert, code)
    }

    async fn update(
        &self,
        id: SpeciesId,
        fields: &SpeciesFields,
    ) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().update_species(id, fields.clone());
        Self::decode(ResourceKind::Species, ProcedureVerb::Update, code)
    }

    async fn delete(&self, id: SpeciesId) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().delete_species(id);
        Self::decode(ResourceKind::Species, ProcedureVerb::Delete, code)
    }
}

#[async_trait]
impl EnclosureRepository for InMemoryZoo {
    async fn find_all(&self) -> Result<Vec<Enclosure>, InfraError> {
        self.ensure_available()?;
        let mut enclosures = self.state.lock().unwrap().enclosures.clone();
        enclosures.sort_by_cached_key(|e| collation_key(&e.location));
        Ok(enclosures)
    }

    async fn insert(&self, fields: &EnclosureFields) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().insert_enclosure(fields.clone());
        Self::decode(ResourceKind::Enclosure, ProcedureVerb::Insert, code)
    }

    async fn update(
        &self,
        id: EnclosureId,
        fields: &EnclosureFields,
    ) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().update_enclosure(id, fields.clone());
        Self::decode(ResourceKind::Enclosure, ProcedureVerb::Update, code)
    }

    async fn delete(&self, id: EnclosureId) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().delete_enclosure(id);
        Self::decode(ResourceKind::Enclosure, ProcedureVerb::Delete, code)
    }
}

#[async_trait]
impl ZookeeperRepository for InMemoryZoo {
    async fn find_all(&self) -> Result<Vec<Zookeeper>, InfraError> {
        self.ensure_available()?;
        let mut keepers = self.state.lock().unwrap().zookeepers.clone();
        keepers.sort_by_cached_key(|z| {
            (
                z.last_name.to_lowercase(),
                z.first_name.to_lowercase(),
                z.last_name.clone(),
                z.first_name.clone(),
            )
        });
        Ok(keepers)
    }

    async fn insert(&self, fields: &ZookeeperFields) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().insert_zookeeper(fields.clone());
        Self::decode(ResourceKind::Zookeeper, ProcedureVerb::Insert, code)
    }

    async fn update(
        &self,
        id: KeeperId,
        fields: &ZookeeperFields,
    ) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().update_zookeeper(id, fields.clone());
        Self::decode(ResourceKind::Zookeeper, ProcedureVerb::Update, code)
    }

    async fn delete(&self, id: KeeperId) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().delete_zookeeper(id);
        Self::decode(ResourceKind::Zookeeper, ProcedureVerb::Delete, code)
    }
}

#[async_trait]
impl AnimalRepository for InMemoryZoo {
    async fn find_all(&self) -> Result<Vec<AnimalDetail>, InfraError> {
        self.ensure_available()?;
        Ok(self.state.lock().unwrap().animal_details())
    }

    async fn insert(&self, fields: &AnimalFields) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().insert_animal(fields.clone());
        Self::decode(ResourceKind::Animal, ProcedureVerb::Insert, code)
    }

    async fn update(
        &self,
        id: AnimalId,
        fields: &AnimalFields,
    ) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().update_animal(id, fields.clone());
        Self::decode(ResourceKind::Animal, ProcedureVerb::Update, code)
    }

    async fn delete(&self, id: AnimalId) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().delete_animal(id);
        Self::decode(ResourceKind::Animal, ProcedureVerb::Delete, code)
    }
}

#[async_trait]
impl AssignmentRepository for InMemoryZoo {
    async fn find_all(&self) -> Result<Vec<AssignmentDetail>, InfraError> {
        self.ensure_available()?;
        Ok(self.state.lock().unwrap().assignment_details())
    }

    async fn insert(&self, key: AssignmentKey) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().insert_assignment(key);
        Self::decode(ResourceKind::Assignment, ProcedureVerb::Insert, code)
    }

    async fn update(
        &self,
        current: AssignmentKey,
        change: AssignmentChange,
    ) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().update_assignment(current, change);
        Self::decode(ResourceKind::Assignment, ProcedureVerb::Update, code)
    }

    async fn delete(&self, key: AssignmentKey) -> Result<ProcedureOutcome, InfraError> {
        self.ensure_available()?;
        let code = self.state.lock().unwrap().delete_assignment(key);
        Self::decode(ResourceKind::Assignment, ProcedureVerb::Delete, code)
    }
}

#[async_trait]
impl ZooRepository for InMemoryZoo {
    async fn reset(&self) -> Result<(), InfraError> {
        self.ensure_available()?;
        *self.state.lock().unwrap() = ZooState::seeded();
        Ok(())
    }
}

#[async_trait]
impl DatabaseProbe for InMemoryZoo {
    async fn ping(&self) -> Result<(), InfraError> {
        self.ensure_available()
    }
}
