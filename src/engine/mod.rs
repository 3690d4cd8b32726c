// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Period & aggregation engine. Every function here is a pure computation
//! over a borrowed snapshot; nothing is retained between calls and callers
//! recompute on demand.

pub mod aggregate;
pub mod calendar;
pub mod export;
pub mod filter;
pub mod kpi;
pub mod series;
