/// 상품 필터링 및 정렬
/// 1. 필터 조건 (검색어, 카테고리, 판매 방식, 상품 상태, 가격 범위)
/// 2. 정렬 키 (최신순, 낮은 가격순, 높은 가격순, 인기순)
// region:    --- Imports
use crate::listing::model::{Item, ListingType};
use crate::search::similarity::similarity;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

// endregion: --- Imports

// region:    --- Filter Criteria
/// 검색어 매칭 임계값 (유사도가 이 값을 초과해야 매칭)
const TEXT_MATCH_THRESHOLD: f64 = 0.3;

/// 가격 범위 기본 상한
pub const DEFAULT_PRICE_MAX: i64 = 2_000_000;

/// 판매 방식 필터 ("all"은 필터링하지 않음)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingTypeFilter {
    #[default]
    All,
    Fixed,
    Auction,
}

/// 필터 조건
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FilterCriteria {
    /// 검색어 (없거나 빈 문자열이면 모든 상품 매칭)
    pub query: Option<String>,
    /// 카테고리 ("all"이면 필터링하지 않음)
    pub category: String,
    /// 판매 방식
    pub listing_type: ListingTypeFilter,
    /// 상품 상태 집합 (비어 있으면 필터링하지 않음)
    pub conditions: Vec<String>,
    /// 가격 범위 하한 (포함)
    pub price_min: i64,
    /// 가격 범위 상한 (포함)
    pub price_max: i64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: None,
            category: "all".to_string(),
            listing_type: ListingTypeFilter::All,
            conditions: Vec::new(),
            price_min: 0,
            price_max: DEFAULT_PRICE_MAX,
        }
    }
}

/// 필터 조건 메서드 구현
impl FilterCriteria {
    /// 가격 범위 불변식 보정: 0 <= price_min <= price_max
    pub fn normalize(&mut self) {
        self.price_min = self.price_min.max(0);
        self.price_max = self.price_max.max(self.price_min);
    }

    /// 상품이 모든 필터 조건을 만족하는지 확인
    pub fn matches(&self, item: &Item) -> bool {
        // 검색어 필터: 제목 또는 설명의 유사도가 임계값을 초과해야 매칭
        let matches_search = match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                similarity(query, &item.title) > TEXT_MATCH_THRESHOLD
                    || similarity(query, &item.description) > TEXT_MATCH_THRESHOLD
            }
        };
        if !matches_search {
            return false;
        }

        // 카테고리 필터 (대소문자 구분 없음)
        if !self.category.eq_ignore_ascii_case("all")
            && !item.category.eq_ignore_ascii_case(&self.category)
        {
            return false;
        }

        // 판매 방식 필터
        let matches_listing_type = match self.listing_type {
            ListingTypeFilter::All => true,
            ListingTypeFilter::Fixed => item.listing_type == ListingType::Fixed,
            ListingTypeFilter::Auction => item.listing_type == ListingType::Auction,
        };
        if !matches_listing_type {
            return false;
        }

        // 상품 상태 필터 (대소문자 구분 없음, 빈 집합이면 통과)
        if !self.conditions.is_empty()
            && !self
                .conditions
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&item.condition))
        {
            return false;
        }

        // 가격 범위 필터 (유효 가격이 0이면 범위와 무관하게 통과)
        let item_price = item.effective_price();
        if item_price != 0 && (item_price < self.price_min || item_price > self.price_max) {
            return false;
        }

        true
    }
}
// endregion: --- Filter Criteria

// region:    --- Sort Key
/// 정렬 키
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// 최신순 (기본값)
    #[default]
    Newest,
    /// 낮은 가격순
    PriceLow,
    /// 높은 가격순
    PriceHigh,
    /// 인기순 (조회수)
    Popular,
}
// endregion: --- Sort Key

// region:    --- Search
/// 상품 컬렉션에 필터와 정렬을 적용하여 결과 목록 반환
/// 순수 함수이며 입력 컬렉션을 변경하지 않는다.
/// 동일한 키를 가진 상품의 상대 순서가 유지되도록 안정 정렬을 사용한다.
pub fn search_items(items: &[Item], criteria: &FilterCriteria, sort: SortKey) -> Vec<Item> {
    let mut results: Vec<Item> = items
        .iter()
        .filter(|item| criteria.matches(item))
        .cloned()
        .collect();

    match sort {
        SortKey::Newest => results.sort_by_key(|item| Reverse(item.created_at_millis())),
        SortKey::PriceLow => results.sort_by_key(Item::effective_price),
        SortKey::PriceHigh => results.sort_by_key(|item| Reverse(item.effective_price())),
        SortKey::Popular => results.sort_by_key(|item| Reverse(item.views)),
    }

    results
}
// endregion: --- Search
