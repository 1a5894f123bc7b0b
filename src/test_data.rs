#[cfg(test)]
pub const POST_DATA: &str = r#"+++
title = "What I learned after 20+ years of software development"
author = "thiago"
published_at = 2022-04-02T12:05:00Z
tags = ["career", "software"]
description = "A list of what I try to do myself"
+++

How to be a great software engineer?

Someone asked me this question today and I didn't have an answer. After thinking for a while, I came up with a list of what I try to do myself.

I will divide this in parts, non-technical and technical
"#;

#[cfg(test)]
pub const DRAFT_POST_DATA: &str = r#"+++
title = "Not ready yet"
published_at = 2022-05-10T08:00:00Z
draft = true
+++

Half-written thoughts.
"#;

#[cfg(test)]
pub const FULL_HEADER_POST_DATA: &str = r#"+++
title = "Release notes, the long way"
author = "ana"
slug = "release-notes"
published_at = 2023-01-15T09:30:00-03:00
modified_at = 2023-02-01T10:00:00-03:00
featured = true
tags = ["releases", "process", "releases"]
description = "Why we write them by hand"
og_image = "images/release-notes-cover.png"
+++

Body goes here.
"#;
