//! Whole-frame tests: manager, projection and the icons widget together
