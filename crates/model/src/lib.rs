// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Domain model for the Facture document library.
//!
//! Provides the monetary value types ([`types::Money`], [`types::Currency`]),
//! the French amount-in-words expansion ([`words`]) used on printed and PDF
//! commercial documents, and the settlement clause those documents embed
//! ([`documents`]).

#![deny(unsafe_code)]

pub mod documents;
pub mod types;
pub mod words;
