// Unit tests for placement-pitcher
// This module organizes all unit tests
