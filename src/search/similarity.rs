/// 퍼지 검색 유사도 계산
/// 검색어와 대상 문자열 사이의 유사도를 [0, 1] 범위로 반환
/// 1. 완전 일치
/// 2. 부분 문자열 포함
/// 3. 단어 단위 매칭 (오타 허용을 위한 편집 거리 포함)

// region:    --- Similarity

/// 단어 단위 매칭을 적용하는 최소 단어 길이
const MIN_WORD_LEN: usize = 3;

/// 오타 허용 편집 거리 상한
const MAX_TYPO_DISTANCE: usize = 2;

/// 두 문자열 사이의 유사도 계산
/// 규칙은 우선순위 순서로 적용되며 먼저 해당하는 규칙의 점수를 반환
pub fn similarity(query: &str, target: &str) -> f64 {
    let s1 = query.to_lowercase();
    let s2 = target.to_lowercase();

    // 완전 일치
    if s1 == s2 {
        return 1.0;
    }

    // 한쪽이 다른 쪽을 포함하는 경우
    if s2.contains(s1.as_str()) {
        return 0.9;
    }
    if s1.contains(s2.as_str()) {
        return 0.85;
    }

    // 단어 단위로 분리하여 단어별 유사도 확인
    let words1: Vec<&str> = s1.split_whitespace().collect();
    let words2: Vec<&str> = s2.split_whitespace().collect();

    if words1.is_empty() {
        return 0.0;
    }

    // 모든 (검색어 단어, 대상 단어) 쌍에 대해 점수를 누적한다.
    // 하나의 검색어 단어가 여러 대상 단어와 매칭되면 그만큼 누적되고,
    // 마지막에 1.0으로 클램핑한다.
    let mut word_matches = 0.0_f64;
    for &word1 in &words1 {
        for &word2 in &words2 {
            if word1.chars().count() >= MIN_WORD_LEN && word2.chars().count() >= MIN_WORD_LEN {
                // 단어 부분 일치
                if word2.contains(word1) || word1.contains(word2) {
                    word_matches += 0.8;
                }
                // 오타 허용: 편집 거리 2 이하
                else if levenshtein_distance(word1, word2) <= MAX_TYPO_DISTANCE {
                    word_matches += 0.6;
                }
            } else if word1 == word2 {
                word_matches += 1.0;
            }
        }
    }

    (word_matches / words1.len() as f64).min(1.0)
}

// endregion: --- Similarity

// region:    --- Levenshtein Distance

/// 오타 허용을 위한 편집 거리 (Levenshtein distance)
/// 삽입, 삭제, 치환 각각 비용 1의 동적 계획법
pub fn levenshtein_distance(str1: &str, str2: &str) -> usize {
    let chars1: Vec<char> = str1.chars().collect();
    let chars2: Vec<char> = str2.chars().collect();

    let mut matrix = vec![vec![0_usize; chars1.len() + 1]; chars2.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=chars1.len() {
        matrix[0][j] = j;
    }

    for i in 1..=chars2.len() {
        for j in 1..=chars1.len() {
            if chars2[i - 1] == chars1[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
            } else {
                matrix[i][j] = (matrix[i - 1][j - 1] + 1)
                    .min(matrix[i][j - 1] + 1)
                    .min(matrix[i - 1][j] + 1);
            }
        }
    }

    matrix[chars2.len()][chars1.len()]
}

// endregion: --- Levenshtein Distance
