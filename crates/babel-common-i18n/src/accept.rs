// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `Accept-Language` header parsing.

/// Parse an `Accept-Language` header into tags ordered by preference.
///
/// Weights are read from `q=` parameters (missing means 1, malformed means 0).
/// Wildcards and zero-weighted tags are dropped. Tags with equal weight keep
/// their header order.
///
/// ```
/// use babel_common_i18n::parse_accept_language;
///
/// assert_eq!(
/// 	parse_accept_language("zh-CN;q=0.5,en-US;q=0.7,fr;q=0.3"),
/// 	vec!["en-US", "zh-CN", "fr"]
/// );
/// ```
pub fn parse_accept_language(header: &str) -> Vec<String> {
	let mut languages: Vec<(&str, u16)> = header
		.split(',')
		.map(str::trim)
		.filter_map(parse_language)
		.filter(|(tag, quality)| *quality > 0 && *tag != "*")
		.collect();

	// stable sort keeps header order for ties
	languages.sort_by(|(_, a), (_, b)| b.cmp(a));
	languages
		.into_iter()
		.map(|(tag, _)| tag.to_string())
		.collect()
}

fn parse_language(value: &str) -> Option<(&str, u16)> {
	let mut parts = value.split(';');
	let tag = parts.next()?.trim();
	if tag.is_empty() {
		return None;
	}
	let quality = match parts.next() {
		Some(quality) => parse_quality(quality).unwrap_or_default(),
		None => 1000,
	};
	Some((tag, quality))
}

fn parse_quality(value: &str) -> Option<u16> {
	let (name, q) = value.split_once('=')?;
	if name.trim() != "q" {
		return None;
	}
	let q = q.trim().parse::<f32>().ok()?;
	if q.is_nan() {
		return None;
	}
	Some((q.clamp(0.0, 1.0) * 1000.0) as u16)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_orders_by_quality() {
		assert_eq!(
			parse_accept_language("zh-CN;q=0.5,en-US;q=0.7,fr;q=0.3"),
			vec!["en-US", "zh-CN", "fr"]
		);
		assert_eq!(
			parse_accept_language("en-US;q=0.7,zh-CN,fr;q=0.3"),
			vec!["zh-CN", "en-US", "fr"]
		);
	}

	#[test]
	fn test_tolerates_whitespace() {
		assert_eq!(
			parse_accept_language("zh-CN ; q=0.5,en-US;q = 0.7,   fr;q=0.3"),
			vec!["en-US", "zh-CN", "fr"]
		);
	}

	#[test]
	fn test_ties_keep_header_order() {
		assert_eq!(
			parse_accept_language("fr-CA,en-US,es"),
			vec!["fr-CA", "en-US", "es"]
		);
		assert_eq!(
			parse_accept_language("de;q=0.8,fr;q=0.8,en"),
			vec!["en", "de", "fr"]
		);
	}

	#[test]
	fn test_drops_wildcard_and_zero_weight() {
		assert_eq!(
			parse_accept_language("fr;q=0, *;q=0.1, es;q=0.2"),
			vec!["es"]
		);
	}

	#[test]
	fn test_malformed_quality_counts_as_zero() {
		assert_eq!(parse_accept_language("fr;q=abc,en"), vec!["en"]);
		assert_eq!(parse_accept_language("fr;level=1,en;q=0.5"), vec!["en"]);
	}

	#[test]
	fn test_quality_is_clamped() {
		assert_eq!(parse_accept_language("fr;q=7,en"), vec!["fr", "en"]);
	}

	#[test]
	fn test_empty_header() {
		assert!(parse_accept_language("").is_empty());
		assert!(parse_accept_language(" , ,").is_empty());
	}
}
