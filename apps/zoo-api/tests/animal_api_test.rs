//! 動物 API ハンドラテスト

mod common;

use axum::{
   body::Body,
   http::{Method, Request, StatusCode, header},
};
use common::{create_test_app, delete, get, post, put, send_request};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value as JsonValue, json};

fn kito() -> JsonValue {
   json!({
      "name": "Kito",
      "dateOfBirth": "2018-03-09",
      "sex": "M",
      "speciesId": 2,
      "enclosureId": 2
   })
}

#[tokio::test]
async fn test_一覧は種と飼育区画の表示項目を含む() {
   let (app, _zoo) = create_test_app();

   let response = get(&app, "/api/Animals").await;

   assert_eq!(response.status, StatusCode::OK);
   let animals = response.json();
   let names: Vec<&str> = animals
      .as_array()
      .unwrap()
      .iter()
      .map(|a| a["name"].as_str().unwrap())
      .collect();
   assert_eq!(names, vec!["Nala", "Pip", "Raja", "Shelly", "Tembo"]);
   assert_eq!(
      animals[4],
      json!({
         "animalId": 1,
         "name": "Tembo",
         "dateOfBirth": "2012-05-14",
         "sex": "M",
         "speciesId": 1,
         "enclosureId": 1,
         "speciesName": "African Elephant",
         "scientificName": "Loxodonta africana",
         "diet": "Herbivore",
         "vertType": "Mammal",
         "enclosureType": "Savanna",
         "location": "North Zone"
      })
   );
}

#[tokio::test]
async fn test_登録した動物が一覧に同じ内容で現れる() {
   let (app, _zoo) = create_test_app();

   let created = post(&app, "/api/Animals", kito()).await;

   assert_eq!(created.status, StatusCode::CREATED);
   let animal_id = created.json()["animalId"].clone();
   assert_eq!(animal_id, 6);
   let list = get(&app, "/api/Animals").await.json();
   let row = list
      .as_array()
      .unwrap()
      .iter()
      .find(|a| a["animalId"] == animal_id)
      .unwrap();
   for field in ["name", "dateOfBirth", "sex", "speciesId", "enclosureId"] {
      assert_eq!(row[field], kito()[field], "{field}");
   }
   assert_eq!(row["speciesName"], "Bengal Tiger");
}

#[tokio::test]
async fn test_フォームの文字列idと日時付き日付を受け付ける() {
   let (app, _zoo) = create_test_app();
   let body = json!({
      "name": "Kito",
      "dateOfBirth": "2018-03-09T00:00:00.000Z",
      "sex": "M",
      "speciesId": "2",
      "enclosureId": "2"
   });

   let response = post(&app, "/api/Animals", body).await;

   assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_存在しない種を参照する登録は400() {
   let (app, _zoo) = create_test_app();
   let mut body = kito();
   body["speciesId"] = json!(9999);

   let response = post(&app, "/api/Animals", body).await;

   assert_eq!(response.status, StatusCode::BAD_REQUEST);
   assert_eq!(response.text(), "Animal insert failed");
}

#[tokio::test]
async fn test_存在しない動物の更新は404でストアは変わらない() {
   let (app, _zoo) = create_test_app();
   let before = get(&app, "/api/Animals").await.json();

   let response = put(&app, "/api/Animals/9999", kito()).await;

   assert_eq!(response.status, StatusCode::NOT_FOUND);
   assert_eq!(response.text(), "Animal not found or update failed");
   assert_eq!(get(&app, "/api/Animals").await.json(), before);
}

#[rstest]
#[case::空のオブジェクト(json!({}))]
#[case::項目不足(json!({"name": "x"}))]
#[case::配列(json!([1, 2]))]
#[tokio::test]
async fn test_存在しない動物の更新は本文によらず404(#[case] body: JsonValue) {
   let (app, _zoo) = create_test_app();

   let response = put(&app, "/api/Animals/9999", body).await;

   assert_eq!(response.status, StatusCode::NOT_FOUND);
   assert_eq!(response.text(), "Animal not found or update failed");
}

#[tokio::test]
async fn test_jsonとして読めない更新本文も404でストアは変わらない() {
   let (app, _zoo) = create_test_app();
   let before = get(&app, "/api/Animals").await.json();
   let request = Request::builder()
      .method(Method::PUT)
      .uri("/api/Animals/1")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{\"name\": "))
      .unwrap();

   let response = send_request(&app, request).await;

   assert_eq!(response.status, StatusCode::NOT_FOUND);
   assert_eq!(response.text(), "Animal not found or update failed");
   assert_eq!(get(&app, "/api/Animals").await.json(), before);
}

#[tokio::test]
async fn test_不正な性別での更新も404に集約される() {
   let (app, _zoo) = create_test_app();
   let mut body = kito();
   body["sex"] = json!("X");

   let response = put(&app, "/api/Animals/1", body).await;

   assert_eq!(response.status, StatusCode::NOT_FOUND);
   assert_eq!(response.text(), "Animal not found or update failed");
}

#[tokio::test]
async fn test_削除した動物は一覧から消える() {
   let (app, _zoo) = create_test_app();

   let response = delete(&app, "/api/Animals/3").await;

   assert_eq!(response.status, StatusCode::OK);
   assert_eq!(
      response.json(),
      json!({"message": "Animal deleted successfully"})
   );
   let list = get(&app, "/api/Animals").await.json();
   assert!(list.as_array().unwrap().iter().all(|a| a["animalId"] != 3));

   let again = delete(&app, "/api/Animals/3").await;
   assert_eq!(again.status, StatusCode::NOT_FOUND);
   assert_eq!(again.text(), "Animal not found or delete failed");
}

#[tokio::test]
async fn test_数値でないパスは400() {
   let (app, _zoo) = create_test_app();

   let response = delete(&app, "/api/Animals/tembo").await;

   assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
