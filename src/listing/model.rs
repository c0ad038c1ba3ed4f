// region:    --- Imports
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// region:    --- Listing Type
/// 판매 방식 (고정가 / 경매)
/// 백엔드가 알 수 없는 값을 보내는 경우 고정가로 처리
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Auction,
    #[default]
    #[serde(other)]
    Fixed,
}
// endregion: --- Listing Type

// region:    --- Item Model
// 상품 모델 (백엔드 `GET /api/items` 응답 형식)
// 누락된 필드는 기본값으로 대체하여 역직렬화가 실패하지 않도록 한다.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub listing_type: ListingType,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub starting_bid: Option<i64>,
    #[serde(default)]
    pub current_bid: Option<i64>,
    #[serde(default)]
    pub bid_increment: Option<i64>,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// 상품 모델 메서드 구현
impl Item {
    /// 필터링/정렬에 사용하는 유효 가격
    /// 경매 상품: 현재 입찰가, 없으면 시작 입찰가, 없으면 0
    /// 고정가 상품: 판매 가격, 없으면 0
    pub fn effective_price(&self) -> i64 {
        match self.listing_type {
            ListingType::Auction => self.current_bid.or(self.starting_bid).unwrap_or(0),
            ListingType::Fixed => self.price.unwrap_or(0),
        }
    }

    /// 정렬에 사용하는 등록 시각 (밀리초)
    /// 등록 시각이 없거나 잘못된 경우 epoch(0)으로 처리
    pub fn created_at_millis(&self) -> i64 {
        self.created_at.map(|t| t.timestamp_millis()).unwrap_or(0)
    }
}
// endregion: --- Item Model
