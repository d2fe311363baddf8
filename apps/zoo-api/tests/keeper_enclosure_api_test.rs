//! 飼育員・飼育区画 API ハンドラテスト

mod common;

use axum::http::StatusCode;
use common::{create_test_app, delete, get, post, put};
use pretty_assertions::assert_eq;
use serde_json::json;

// ===== 飼育員 =====

#[tokio::test]
async fn test_飼育員一覧は姓名順() {
   let (app, _zoo) = create_test_app();

   let list = get(&app, "/api/Zookeepers").await.json();

   let last_names: Vec<&str> = list
      .as_array()
      .unwrap()
      .iter()
      .map(|z| z["lastName"].as_str().unwrap())
      .collect();
   assert_eq!(last_names, vec!["Lopez", "Okafor", "Shah"]);
   assert_eq!(list[0]["hireDate"], "2019-06-01");
   assert_eq!(list[0]["speciality"], "Large Mammals");
}

#[tokio::test]
async fn test_飼育員を登録するとkeeper_idが返る() {
   let (app, _zoo) = create_test_app();
   let body = json!({
      "firstName": "Aiko",
      "lastName": "Tanaka",
      "hireDate": "2023-04-01",
      "specialty": "Primates"
   });

   let response = post(&app, "/api/Zookeepers", body).await;

   assert_eq!(response.status, StatusCode::CREATED);
   assert_eq!(response.json(), json!({"keeperId": 4}));
   let list = get(&app, "/api/Zookeepers").await.json();
   let row = list
      .as_array()
      .unwrap()
      .iter()
      .find(|z| z["keeperId"] == 4)
      .unwrap();
   assert_eq!(row["speciality"], "Primates");
}

#[tokio::test]
async fn test_飼育員を更新すると一覧に反映される() {
   let (app, _zoo) = create_test_app();
   let body = json!({
      "firstName": "Maya",
      "lastName": "Lopez",
      "hireDate": "2019-06-01T00:00:00.000Z",
      "speciality": "Elephants"
   });

   let response = put(&app, "/api/Zookeepers/1", body).await;

   assert_eq!(response.status, StatusCode::OK);
   assert_eq!(
      response.json(),
      json!({"message": "Zookeeper updated successfully"})
   );
   let list = get(&app, "/api/Zookeepers").await.json();
   let row = list
      .as_array()
      .unwrap()
      .iter()
      .find(|z| z["keeperId"] == 1)
      .unwrap();
   assert_eq!(row["speciality"], "Elephants");
   assert_eq!(row["hireDate"], "2019-06-01");
}

#[tokio::test]
async fn test_存在しない飼育員の更新は404() {
   let (app, _zoo) = create_test_app();
   let body = json!({
      "firstName": "No",
      "lastName": "One",
      "hireDate": "2020-01-01",
      "speciality": "None"
   });

   let response = put(&app, "/api/Zookeepers/9999", body).await;

   assert_eq!(response.status, StatusCode::NOT_FOUND);
   assert_eq!(response.text(), "Zookeeper not found or update failed");
}

#[tokio::test]
async fn test_飼育員を削除すると担当割り当ても消える() {
   let (app, _zoo) = create_test_app();

   let response = delete(&app, "/api/Zookeepers/3").await;

   assert_eq!(response.status, StatusCode::OK);
   assert_eq!(
      response.json(),
      json!({"message": "Zookeeper deleted successfully"})
   );
   let assignments = get(&app, "/api/Assignments").await.json();
   assert_eq!(assignments.as_array().unwrap().len(), 2);
}

// ===== 飼育区画 =====

#[tokio::test]
async fn test_飼育区画一覧は所在地順() {
   let (app, _zoo) = create_test_app();

   let list = get(&app, "/api/Enclosures").await.json();

   let locations: Vec<&str> = list
      .as_array()
      .unwrap()
      .iter()
      .map(|e| e["location"].as_str().unwrap())
      .collect();
   assert_eq!(
      locations,
      vec!["East Zone", "North Zone", "South Zone", "West Zone"]
   );
}

#[tokio::test]
async fn test_登録した飼育区画が一覧に同じ内容で現れる() {
   let (app, _zoo) = create_test_app();
   let body = json!({
      "enclosureType": "Aviary",
      "location": "Central Zone",
      "maximumCapacity": 15
   });

   let created = post(&app, "/api/Enclosures", body).await;

   assert_eq!(created.status, StatusCode::CREATED);
   assert_eq!(created.json(), json!({"enclosureId": 5}));
   let list = get(&app, "/api/Enclosures").await.json();
   let row = list
      .as_array()
      .unwrap()
      .iter()
      .find(|e| e["enclosureId"] == 5)
      .cloned()
      .unwrap();
   assert_eq!(
      row,
      json!({
         "enclosureId": 5,
         "enclosureType": "Aviary",
         "location": "Central Zone",
         "maximumCapacity": 15
      })
   );
}

#[tokio::test]
async fn test_動物のいない飼育区画は削除できる() {
   let (app, _zoo) = create_test_app();
   let body = json!({
      "enclosureType": "Aviary",
      "location": "Central Zone",
      "maximumCapacity": 15
   });
   post(&app, "/api/Enclosures", body).await;

   let response = delete(&app, "/api/Enclosures/5").await;

   assert_eq!(response.status, StatusCode::OK);
   assert_eq!(
      response.json(),
      json!({"message": "Enclosure deleted successfully"})
   );
   let list = get(&app, "/api/Enclosures").await.json();
   assert!(list.as_array().unwrap().iter().all(|e| e["enclosureId"] != 5));
}

#[tokio::test]
async fn test_存在しない飼育区画の更新は404() {
   let (app, _zoo) = create_test_app();
   let body = json!({
      "enclosureType": "Aviary",
      "location": "Nowhere",
      "maximumCapacity": 1
   });

   let response = put(&app, "/api/Enclosures/9999", body).await;

   assert_eq!(response.status, StatusCode::NOT_FOUND);
   assert_eq!(response.text(), "Enclosure not found or update failed");
}

#[tokio::test]
async fn test_定員0の飼育区画は登録できない() {
   let (app, _zoo) = create_test_app();
   let body = json!({
      "enclosureType": "Aviary",
      "location": "Central Zone",
      "maximumCapacity": 0
   });

   let response = post(&app, "/api/Enclosures", body).await;

   assert_eq!(response.status, StatusCode::BAD_REQUEST);
   assert_eq!(response.text(), "Enclosure insert failed");
}

#[tokio::test]
async fn test_飼育区画を更新できる() {
   let (app, _zoo) = create_test_app();
   let body = json!({
      "enclosureType": "Savanna",
      "location": "North Zone",
      "maximumCapacity": "8"
   });

   let response = put(&app, "/api/Enclosures/1", body).await;

   assert_eq!(response.status, StatusCode::OK);
   let list = get(&app, "/api/Enclosures").await.json();
   let row = list
      .as_array()
      .unwrap()
      .iter()
      .find(|e| e["enclosureId"] == 1)
      .unwrap();
   assert_eq!(row["maximumCapacity"], 8);
}

#[tokio::test]
async fn test_動物がいる飼育区画の削除は404() {
   let (app, _zoo) = create_test_app();

   let response = delete(&app, "/api/Enclosures/1").await;

   assert_eq!(response.status, StatusCode::NOT_FOUND);
   assert_eq!(response.text(), "Enclosure not found or delete failed");
}
